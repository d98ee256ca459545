use crate::error::DashboardError;
use crate::models::prediction_types::Tier;
use serde::Serialize;

/// Upper bounds of the Good, Moderate and Poor bands. Each bound is inclusive.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub good_max: f64,
    pub moderate_max: f64,
    pub poor_max: f64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Co,
    No2,
    C6h6,
    Pm25,
}

pub const POLLUTANTS: [Pollutant; 4] = [
    Pollutant::Co,
    Pollutant::No2,
    Pollutant::C6h6,
    Pollutant::Pm25,
];

impl Pollutant {
    pub fn from_name(name: &str) -> Result<Self, DashboardError> {
        match name {
            "CO" => Ok(Pollutant::Co),
            "NO2" => Ok(Pollutant::No2),
            "C6H6" => Ok(Pollutant::C6h6),
            "PM2.5" | "PM25" => Ok(Pollutant::Pm25),
            _ => Err(DashboardError::UnknownPollutant(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO2",
            Pollutant::C6h6 => "C6H6",
            Pollutant::Pm25 => "PM2.5",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Co => "mg/m³",
            Pollutant::No2 | Pollutant::C6h6 | Pollutant::Pm25 => "μg/m³",
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        let (good_max, moderate_max, poor_max) = match self {
            Pollutant::Co => (2.0, 4.0, 6.0),
            Pollutant::No2 => (40.0, 80.0, 120.0),
            Pollutant::C6h6 => (5.0, 10.0, 15.0),
            Pollutant::Pm25 => (12.0, 35.0, 55.0),
        };
        Thresholds {
            good_max,
            moderate_max,
            poor_max,
        }
    }
}

impl Thresholds {
    pub fn tier(&self, value: f64) -> Tier {
        if value <= self.good_max {
            Tier::Good
        } else if value <= self.moderate_max {
            Tier::Moderate
        } else {
            // Anything past poor_max is still Poor at this level
            Tier::Poor
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Classification {
    pub pollutant: Pollutant,
    pub tier: Tier,
    pub thresholds: Thresholds,
}

pub fn classify(pollutant: &str, value: f64) -> Result<Classification, DashboardError> {
    let pollutant = Pollutant::from_name(pollutant)?;
    let thresholds = pollutant.thresholds();
    Ok(Classification {
        pollutant,
        tier: thresholds.tier(value),
        thresholds,
    })
}
