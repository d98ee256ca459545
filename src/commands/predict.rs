use crate::commands::Dashboard;
use crate::error::DashboardError;
use crate::models::prediction_types::{
    ClassifiedPrediction, PollutantReading, PredictResponse, PredictionRequest,
};
use crate::services::gateway::PredictionApi;
use crate::services::{aqi, classifier};

impl<A: PredictionApi> Dashboard<A> {
    /// Validate, predict, then classify every returned pollutant. Predictions
    /// are not serialized against each other; only training is guarded.
    pub async fn request_prediction(
        &self,
        input: &PredictionRequest,
    ) -> Result<ClassifiedPrediction, DashboardError> {
        if let Err(e) = input.validate() {
            tracing::warn!(error = %e, "Prediction input rejected");
            return Err(e);
        }

        let response = self.api.predict(input).await?;
        let classified = classify_response(response)?;

        // Replaced wholesale, never merged with the previous result
        *self.last_prediction.lock().await = Some(classified.clone());
        Ok(classified)
    }
}

pub fn classify_response(response: PredictResponse) -> Result<ClassifiedPrediction, DashboardError> {
    let mut readings = Vec::with_capacity(response.predictions.len());
    for (pollutant, value) in response.predictions {
        let classification = classifier::classify(&pollutant, value)?;
        let sub_index = aqi::sub_index(&pollutant, value)?;
        readings.push(PollutantReading {
            pollutant,
            value,
            unit: classification.pollutant.unit(),
            tier: classification.tier,
            sub_index,
        });
    }

    let sub_indices: Vec<f64> = readings.iter().map(|r| r.sub_index).collect();
    let overall = aqi::aggregate(&sub_indices)?;

    Ok(ClassifiedPrediction {
        readings,
        aqi: overall,
        aqi_status: aqi::status(overall),
        timestamp: response.timestamp,
    })
}
