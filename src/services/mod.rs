pub mod aqi;
pub mod classifier;
pub mod gateway;
pub mod status_store;
