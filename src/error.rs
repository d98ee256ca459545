use serde::Serialize;
use std::fmt;

/// The five calls the dashboard makes against the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Health,
    ModelInfo,
    Predict,
    Train,
    DownloadDataset,
}

impl Operation {
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Health => "/health",
            Operation::ModelInfo => "/model-info",
            Operation::Predict => "/predict",
            Operation::Train => "/train",
            Operation::DownloadDataset => "/download-dataset",
        }
    }

    pub fn method(&self) -> reqwest::Method {
        match self {
            Operation::Health | Operation::ModelInfo => reqwest::Method::GET,
            Operation::Predict | Operation::Train | Operation::DownloadDataset => {
                reqwest::Method::POST
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Health => "health",
            Operation::ModelInfo => "model-info",
            Operation::Predict => "predict",
            Operation::Train => "train",
            Operation::DownloadDataset => "download-dataset",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("{operation} request failed: {cause}")]
    RequestFailed { operation: Operation, cause: String },
    #[error("Model is already training")]
    AlreadyTraining,
    #[error("No training is in progress")]
    NotTraining,
    #[error("Unknown pollutant: {0}")]
    UnknownPollutant(String),
    #[error("No readings to aggregate")]
    NoData,
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn request_failed(operation: Operation, cause: impl fmt::Display) -> Self {
        DashboardError::RequestFailed {
            operation,
            cause: cause.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Validation(_) => ErrorKind::Validation,
            DashboardError::RequestFailed { .. } => ErrorKind::RequestFailed,
            DashboardError::AlreadyTraining => ErrorKind::AlreadyTraining,
            DashboardError::NotTraining => ErrorKind::NotTraining,
            DashboardError::UnknownPollutant(_) => ErrorKind::UnknownPollutant,
            DashboardError::NoData => ErrorKind::NoData,
            DashboardError::Config(_) => ErrorKind::Config,
        }
    }

    /// Operation-scoped notification for the UI. `operation` names the user
    /// action when the error itself does not carry one.
    pub fn notification(&self, operation: Option<Operation>) -> Notification {
        let operation = match self {
            DashboardError::RequestFailed { operation, .. } => Some(*operation),
            _ => operation,
        };
        Notification {
            operation,
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    RequestFailed,
    AlreadyTraining,
    NotTraining,
    UnknownPollutant,
    NoData,
    Config,
}

/// What the UI shell shows for a failed operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub operation: Option<Operation>,
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Some(op) => write!(f, "[{}] {}", op, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<&DashboardError> for Notification {
    fn from(err: &DashboardError) -> Self {
        err.notification(None)
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Config(err.to_string())
    }
}
