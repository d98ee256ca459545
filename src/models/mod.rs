pub mod model_info_types;
pub mod prediction_types;
pub mod status_types;
