use crate::commands::Dashboard;
use crate::error::DashboardError;
use crate::models::status_types::DatasetReceipt;
use crate::services::gateway::PredictionApi;

impl<A: PredictionApi> Dashboard<A> {
    /// Ask the service to fetch its training dataset. Model status is untouched
    /// either way.
    pub async fn request_dataset_download(&self) -> Result<DatasetReceipt, DashboardError> {
        let receipt = self.api.download_dataset().await?;
        tracing::info!(path = receipt.path.as_deref().unwrap_or("-"), "Dataset downloaded");
        Ok(receipt)
    }
}
