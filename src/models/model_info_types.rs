use crate::models::status_types::AccuracyMap;
use serde::{Deserialize, Serialize};

/// Descriptor of the model currently loaded by the service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelInfo {
    pub model_type: String,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    // Either an accuracy object or a placeholder string such as "Not available"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_accuracy: Option<serde_json::Value>,
}

impl ModelInfo {
    pub fn accuracy(&self) -> Option<AccuracyMap> {
        let value = self.model_accuracy.as_ref()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
