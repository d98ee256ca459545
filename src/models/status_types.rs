use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Training metrics the service reports for one target.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TargetAccuracy {
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mse: Option<f64>,
}

pub type AccuracyMap = BTreeMap<String, TargetAccuracy>;

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ModelStatus {
    pub is_connected: bool,
    pub is_loaded: bool,
    pub is_training: bool,
    pub accuracy: Option<AccuracyMap>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_trained_at: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HealthReport {
    pub model_loaded: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrainResponse {
    pub accuracy: AccuracyMap,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DatasetReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
