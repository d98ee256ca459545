use crate::commands::Dashboard;
use crate::error::DashboardError;
use crate::models::status_types::AccuracyMap;
use crate::services::gateway::PredictionApi;

impl<A: PredictionApi> Dashboard<A> {
    /// Train a new model. While one train is in flight every other call fails
    /// fast with `AlreadyTraining` and issues no request.
    pub async fn request_train(&self) -> Result<AccuracyMap, DashboardError> {
        self.store.begin_train().await?;

        match self.api.train_model().await {
            Ok(accuracy) => {
                self.store.complete_train(accuracy.clone()).await?;
                self.model_info.lock().await.generation += 1;
                Ok(accuracy)
            }
            Err(e) => {
                self.store.fail_train().await?;
                Err(e)
            }
        }
    }
}
