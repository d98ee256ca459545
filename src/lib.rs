pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use commands::{Dashboard, StatusReport};
pub use config::DashboardConfig;
pub use error::{DashboardError, Notification, Operation};
pub use models::prediction_types::{AqiStatus, ClassifiedPrediction, PredictionRequest, Tier};
pub use models::status_types::ModelStatus;
pub use services::gateway::{ApiGateway, PredictionApi};

/// Start a dashboard session against the configured service. Installs logging
/// from `config.log_filter` unless a subscriber is already set. The session
/// begins from the unknown state and refreshes it right away; a failed first
/// refresh is logged and leaves the dashboard disconnected.
pub async fn run(config: DashboardConfig) -> Result<Dashboard<ApiGateway>, DashboardError> {
    if !logging::init_logging(&config.log_filter)? {
        tracing::debug!("Tracing subscriber already installed");
    }

    let dashboard = Dashboard::new(ApiGateway::new(&config));
    tracing::info!(api = %dashboard.api().base_url(), "Dashboard session started");

    match dashboard.request_status().await {
        Ok(report) => {
            tracing::info!(
                connected = report.status.is_connected,
                loaded = report.status.is_loaded,
                "Initial status"
            );
        }
        Err(e) => {
            let note = e.notification(Some(Operation::Health));
            tracing::warn!(%note, "Initial status refresh failed");
        }
    }

    Ok(dashboard)
}
