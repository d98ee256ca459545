use crate::error::DashboardError;
use crate::models::status_types::{AccuracyMap, ModelStatus};
use crate::services::gateway::PredictionApi;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;

/// Sole owner of the model lifecycle snapshot. All changes go through the
/// named transitions below; readers get copies.
#[derive(Clone, Default)]
pub struct StatusStore {
    status: Arc<Mutex<ModelStatus>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> ModelStatus {
        self.status.lock().await.clone()
    }

    /// Poll service health. A failed poll only marks the service unreachable;
    /// the last known `is_loaded` is kept.
    pub async fn refresh<A: PredictionApi>(&self, api: &A) -> Result<ModelStatus, DashboardError> {
        let result = api.check_health().await;

        let mut status = self.status.lock().await;
        match result {
            Ok(report) => {
                if !status.is_connected {
                    tracing::info!(model_loaded = report.model_loaded, "Prediction service connected");
                }
                status.is_connected = true;
                status.is_loaded = report.model_loaded;
                Ok(status.clone())
            }
            Err(e) => {
                if status.is_connected {
                    tracing::warn!("Prediction service disconnected");
                }
                status.is_connected = false;
                Err(e)
            }
        }
    }

    pub async fn begin_train(&self) -> Result<(), DashboardError> {
        let mut status = self.status.lock().await;
        if status.is_training {
            return Err(DashboardError::AlreadyTraining);
        }
        status.is_training = true;
        tracing::info!("Training started");
        Ok(())
    }

    pub async fn complete_train(&self, accuracy: AccuracyMap) -> Result<ModelStatus, DashboardError> {
        self.complete_train_at(accuracy, OffsetDateTime::now_utc()).await
    }

    async fn complete_train_at(
        &self,
        accuracy: AccuracyMap,
        trained_at: OffsetDateTime,
    ) -> Result<ModelStatus, DashboardError> {
        let mut status = self.status.lock().await;
        if !status.is_training {
            return Err(DashboardError::NotTraining);
        }
        status.is_training = false;
        status.is_loaded = true;
        status.accuracy = Some(accuracy);
        status.last_trained_at = Some(trained_at);
        tracing::info!(targets = status.accuracy.as_ref().map_or(0, |a| a.len()), "Training completed");
        Ok(status.clone())
    }

    /// A failed train never claims a new model exists.
    pub async fn fail_train(&self) -> Result<ModelStatus, DashboardError> {
        let mut status = self.status.lock().await;
        if !status.is_training {
            return Err(DashboardError::NotTraining);
        }
        status.is_training = false;
        tracing::warn!("Training failed");
        Ok(status.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Operation;
    use crate::models::model_info_types::ModelInfo;
    use crate::models::prediction_types::{PredictResponse, PredictionRequest};
    use crate::models::status_types::{DatasetReceipt, HealthReport, TargetAccuracy};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned service for store and orchestrator tests. Counts every call.
    #[derive(Default)]
    pub(crate) struct StubApi {
        pub health: Option<HealthReport>,
        pub model_info: Option<ModelInfo>,
        pub predictions: Option<PredictResponse>,
        pub accuracy: Option<AccuracyMap>,
        pub receipt: Option<DatasetReceipt>,
        pub train_gate: Option<Arc<tokio::sync::Notify>>,
        pub model_info_gate: Option<Arc<tokio::sync::Notify>>,
        pub calls: AtomicUsize,
        pub health_calls: AtomicUsize,
        pub model_info_calls: AtomicUsize,
        pub predict_calls: AtomicUsize,
        pub train_calls: AtomicUsize,
    }

    fn canned<T: Clone>(value: &Option<T>, operation: Operation) -> Result<T, DashboardError> {
        value
            .clone()
            .ok_or_else(|| DashboardError::request_failed(operation, "connection refused"))
    }

    impl PredictionApi for StubApi {
        async fn check_health(&self) -> Result<HealthReport, DashboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.health_calls.fetch_add(1, Ordering::SeqCst);
            canned(&self.health, Operation::Health)
        }

        async fn fetch_model_info(&self) -> Result<ModelInfo, DashboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.model_info_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.model_info_gate {
                gate.notified().await;
            }
            canned(&self.model_info, Operation::ModelInfo)
        }

        async fn predict(&self, _request: &PredictionRequest) -> Result<PredictResponse, DashboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.predict_calls.fetch_add(1, Ordering::SeqCst);
            canned(&self.predictions, Operation::Predict)
        }

        async fn train_model(&self) -> Result<AccuracyMap, DashboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.train_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.train_gate {
                gate.notified().await;
            }
            canned(&self.accuracy, Operation::Train)
        }

        async fn download_dataset(&self) -> Result<DatasetReceipt, DashboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            canned(&self.receipt, Operation::DownloadDataset)
        }
    }

    pub(crate) fn health(model_loaded: bool) -> HealthReport {
        HealthReport {
            model_loaded,
            status: Some("healthy".into()),
            timestamp: None,
        }
    }

    pub(crate) fn sample_accuracy() -> AccuracyMap {
        let mut accuracy = AccuracyMap::new();
        accuracy.insert(
            "CO(GT)".into(),
            TargetAccuracy {
                r2: 0.92,
                rmse: 0.41,
                mae: 0.29,
                mse: None,
            },
        );
        accuracy
    }

    #[tokio::test]
    async fn starts_unknown() {
        let status = StatusStore::new().current().await;

        assert!(!status.is_connected);
        assert!(!status.is_loaded);
        assert!(!status.is_training);
        assert_eq!(status.accuracy, None);
        assert_eq!(status.last_trained_at, None);
    }

    #[tokio::test]
    async fn refresh_marks_connected_and_loaded() {
        let store = StatusStore::new();
        let api = StubApi {
            health: Some(health(true)),
            ..StubApi::default()
        };

        let status = store.refresh(&api).await.unwrap();
        assert!(status.is_connected);
        assert!(status.is_loaded);
        assert_eq!(store.current().await, status);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_known_model() {
        let store = StatusStore::new();
        let up = StubApi {
            health: Some(health(true)),
            ..StubApi::default()
        };
        store.refresh(&up).await.unwrap();

        let err = store.refresh(&StubApi::default()).await.unwrap_err();
        assert!(matches!(
            err,
            DashboardError::RequestFailed { operation: Operation::Health, .. }
        ));

        let status = store.current().await;
        assert!(!status.is_connected);
        assert!(status.is_loaded);
    }

    #[tokio::test]
    async fn second_begin_train_is_rejected() {
        let store = StatusStore::new();
        store.begin_train().await.unwrap();

        assert_eq!(store.begin_train().await, Err(DashboardError::AlreadyTraining));
        assert!(store.current().await.is_training);

        store.fail_train().await.unwrap();
        assert!(store.begin_train().await.is_ok());
    }

    #[tokio::test]
    async fn complete_train_records_accuracy() {
        let store = StatusStore::new();
        store.begin_train().await.unwrap();

        let trained_at = OffsetDateTime::UNIX_EPOCH;
        let status = store
            .complete_train_at(sample_accuracy(), trained_at)
            .await
            .unwrap();

        assert!(!status.is_training);
        assert!(status.is_loaded);
        assert_eq!(status.accuracy, Some(sample_accuracy()));
        assert_eq!(status.last_trained_at, Some(trained_at));
    }

    #[tokio::test]
    async fn fail_train_leaves_model_fields_alone() {
        let store = StatusStore::new();
        store.begin_train().await.unwrap();
        store.complete_train(sample_accuracy()).await.unwrap();
        let before = store.current().await;

        store.begin_train().await.unwrap();
        let status = store.fail_train().await.unwrap();

        assert!(!status.is_training);
        assert_eq!(status.is_loaded, before.is_loaded);
        assert_eq!(status.accuracy, before.accuracy);
        assert_eq!(status.last_trained_at, before.last_trained_at);
    }

    #[tokio::test]
    async fn fail_train_on_fresh_store_keeps_model_unloaded() {
        let store = StatusStore::new();
        store.begin_train().await.unwrap();
        let status = store.fail_train().await.unwrap();

        assert!(!status.is_loaded);
        assert_eq!(status.accuracy, None);
    }

    #[tokio::test]
    async fn resolving_without_training_is_rejected() {
        let store = StatusStore::new();

        assert_eq!(store.fail_train().await, Err(DashboardError::NotTraining));
        assert_eq!(
            store.complete_train(sample_accuracy()).await,
            Err(DashboardError::NotTraining)
        );
        assert_eq!(store.current().await, ModelStatus::default());
    }

    #[test]
    fn status_serializes_timestamp_as_rfc3339() {
        let status = ModelStatus {
            last_trained_at: Some(OffsetDateTime::UNIX_EPOCH),
            ..ModelStatus::default()
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["last_trained_at"], "1970-01-01T00:00:00Z");
        assert_eq!(json["accuracy"], serde_json::Value::Null);
    }
}
