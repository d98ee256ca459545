use crate::commands::Dashboard;
use crate::error::DashboardError;
use crate::models::model_info_types::ModelInfo;
use crate::models::status_types::ModelStatus;
use crate::services::gateway::PredictionApi;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatusReport {
    pub status: ModelStatus,
    /// Present only while the service reports a loaded model.
    pub model_info: Option<ModelInfo>,
}

impl<A: PredictionApi> Dashboard<A> {
    /// Refresh health, then (only after health says the model is loaded) make
    /// sure the model descriptor is cached.
    pub async fn request_status(&self) -> Result<StatusReport, DashboardError> {
        let status = self.store.refresh(&self.api).await?;
        if !status.is_loaded {
            return Ok(StatusReport {
                status,
                model_info: None,
            });
        }

        let generation = {
            let cache = self.model_info.lock().await;
            if cache.is_current() {
                return Ok(StatusReport {
                    status,
                    model_info: cache.info.clone(),
                });
            }
            cache.generation
        };

        let info = self.api.fetch_model_info().await?;
        let mut cache = self.model_info.lock().await;
        if cache.generation == generation {
            tracing::debug!(model_type = %info.model_type, targets = info.targets.len(), "Model info cached");
            cache.info = Some(info.clone());
            cache.fetched_at = generation;
        } else {
            // A training finished while this fetch was in flight
            tracing::debug!(model_type = %info.model_type, "Model info outdated on arrival, not cached");
        }

        Ok(StatusReport {
            status,
            model_info: Some(info),
        })
    }
}
