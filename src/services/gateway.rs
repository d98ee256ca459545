use crate::config::DashboardConfig;
use crate::error::{DashboardError, Operation};
use crate::models::model_info_types::ModelInfo;
use crate::models::prediction_types::{PredictResponse, PredictionRequest};
use crate::models::status_types::{AccuracyMap, DatasetReceipt, HealthReport, TrainResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The prediction service as seen by the dashboard. Every call issues exactly
/// one request and reports any failure as `RequestFailed`.
#[allow(async_fn_in_trait)]
pub trait PredictionApi {
    async fn check_health(&self) -> Result<HealthReport, DashboardError>;
    async fn fetch_model_info(&self) -> Result<ModelInfo, DashboardError>;
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictResponse, DashboardError>;
    async fn train_model(&self) -> Result<AccuracyMap, DashboardError>;
    async fn download_dataset(&self) -> Result<DatasetReceipt, DashboardError>;
}

#[derive(serde::Deserialize)]
struct ServiceError {
    error: String,
}

#[derive(Clone)]
pub struct ApiGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &DashboardConfig) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    async fn call<B, T>(&self, operation: Operation, body: Option<&B>) -> Result<T, DashboardError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(operation);
        tracing::debug!(%operation, %url, "Sending request");

        let mut request = self.client.request(operation.method(), &url);
        if let Some(body) = body {
            request = request.json(body);
        } else if operation.method() == reqwest::Method::POST {
            request = request.header(reqwest::header::CONTENT_TYPE, "application/json");
        }

        let result = self.send(operation, request).await;
        if let Err(ref e) = result {
            tracing::warn!(%operation, error = %e, "Request failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, DashboardError> {
        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::request_failed(operation, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::request_failed(operation, format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let cause = match serde_json::from_str::<ServiceError>(&body) {
                Ok(err) => format!("HTTP {}: {}", status, err.error),
                Err(_) => format!("HTTP {}", status),
            };
            return Err(DashboardError::request_failed(operation, cause));
        }

        serde_json::from_str(&body).map_err(|e| {
            DashboardError::request_failed(operation, format!("Malformed response body: {}", e))
        })
    }
}

impl PredictionApi for ApiGateway {
    async fn check_health(&self) -> Result<HealthReport, DashboardError> {
        self.call::<(), _>(Operation::Health, None).await
    }

    async fn fetch_model_info(&self) -> Result<ModelInfo, DashboardError> {
        self.call::<(), _>(Operation::ModelInfo, None).await
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictResponse, DashboardError> {
        self.call(Operation::Predict, Some(request)).await
    }

    async fn train_model(&self) -> Result<AccuracyMap, DashboardError> {
        let response: TrainResponse = self.call::<(), _>(Operation::Train, None).await?;
        Ok(response.accuracy)
    }

    async fn download_dataset(&self) -> Result<DatasetReceipt, DashboardError> {
        self.call::<(), _>(Operation::DownloadDataset, None).await
    }
}
