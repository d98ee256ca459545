//! User-initiated operations. Each one returns an explicit result; nothing
//! here retries or times out.

pub mod dataset;
pub mod predict;
pub mod status;
pub mod train;

use crate::models::model_info_types::ModelInfo;
use crate::models::prediction_types::ClassifiedPrediction;
use crate::services::gateway::{ApiGateway, PredictionApi};
use crate::services::status_store::StatusStore;
use tokio::sync::Mutex;

pub use status::StatusReport;

#[derive(Default)]
struct ModelInfoCache {
    info: Option<ModelInfo>,
    // Bumped by every completed training
    generation: u64,
    // Generation `info` was fetched under
    fetched_at: u64,
}

impl ModelInfoCache {
    fn is_current(&self) -> bool {
        self.info.is_some() && self.fetched_at == self.generation
    }
}

pub struct Dashboard<A: PredictionApi = ApiGateway> {
    api: A,
    store: StatusStore,
    model_info: Mutex<ModelInfoCache>,
    last_prediction: Mutex<Option<ClassifiedPrediction>>,
}

impl<A: PredictionApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: StatusStore::new(),
            model_info: Mutex::new(ModelInfoCache::default()),
            last_prediction: Mutex::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read-only handle for UI snapshots.
    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    pub async fn cached_model_info(&self) -> Option<ModelInfo> {
        self.model_info.lock().await.info.clone()
    }

    pub async fn last_prediction(&self) -> Option<ClassifiedPrediction> {
        self.last_prediction.lock().await.clone()
    }
}
