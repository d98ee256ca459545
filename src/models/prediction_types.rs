use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input for one prediction. `None` means the field was left blank, which the
/// service imputes; it is never sent as zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PredictionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt08_s1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt08_s2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt08_s3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt08_s4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt08_s5: Option<f64>,
}

impl PredictionRequest {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            ..Self::default()
        }
    }

    /// Build a request from raw form fields. Blank values stay absent.
    pub fn from_form<'a, I>(fields: I) -> Result<Self, DashboardError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::default();
        for (name, raw) in fields {
            let slot = request.field_mut(name).ok_or_else(|| {
                DashboardError::Validation(format!("unknown field '{}'", name))
            })?;

            let raw = raw.trim();
            if raw.is_empty() {
                *slot = None;
                continue;
            }

            let value: f64 = raw.parse().map_err(|_| {
                DashboardError::Validation(format!("{} must be a number, got '{}'", name, raw))
            })?;
            if !value.is_finite() {
                return Err(DashboardError::Validation(format!(
                    "{} must be a finite number",
                    name
                )));
            }
            *slot = Some(value);
        }
        Ok(request)
    }

    /// Temperature and humidity are mandatory, everything else is optional.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.temperature.is_none() {
            return Err(DashboardError::Validation("temperature is required".into()));
        }
        if self.humidity.is_none() {
            return Err(DashboardError::Validation("humidity is required".into()));
        }
        // NaN and infinities would go out as JSON null
        for (name, value) in self.present_fields() {
            if !value.is_finite() {
                return Err(DashboardError::Validation(format!(
                    "{} must be a finite number",
                    name
                )));
            }
        }
        Ok(())
    }

    fn present_fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("absolute_humidity", self.absolute_humidity),
            ("pt08_s1", self.pt08_s1),
            ("pt08_s2", self.pt08_s2),
            ("pt08_s3", self.pt08_s3),
            ("pt08_s4", self.pt08_s4),
            ("pt08_s5", self.pt08_s5),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Option<f64>> {
        match name {
            "temperature" => Some(&mut self.temperature),
            "humidity" => Some(&mut self.humidity),
            "absolute_humidity" => Some(&mut self.absolute_humidity),
            "pt08_s1" => Some(&mut self.pt08_s1),
            "pt08_s2" => Some(&mut self.pt08_s2),
            "pt08_s3" => Some(&mut self.pt08_s3),
            "pt08_s4" => Some(&mut self.pt08_s4),
            "pt08_s5" => Some(&mut self.pt08_s5),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PredictResponse {
    pub predictions: BTreeMap<String, f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Good,
    Moderate,
    Poor,
}

/// Overall band of an aggregated AQI.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiStatus {
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PollutantReading {
    pub pollutant: String,
    pub value: f64,
    pub unit: &'static str,
    pub tier: Tier,
    pub sub_index: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ClassifiedPrediction {
    pub readings: Vec<PollutantReading>,
    pub aqi: f64,
    pub aqi_status: AqiStatus,
    pub timestamp: Option<String>,
}

impl ClassifiedPrediction {
    pub fn reading(&self, pollutant: &str) -> Option<&PollutantReading> {
        self.readings.iter().find(|r| r.pollutant == pollutant)
    }
}
