use crate::error::DashboardError;
use crate::models::prediction_types::AqiStatus;
use crate::services::classifier::Pollutant;

const GOOD_MAX_AQI: f64 = 50.0;
const MODERATE_MAX_AQI: f64 = 100.0;
const POOR_MAX_AQI: f64 = 150.0;
const AQI_CEILING: f64 = 500.0;

/// Overall AQI is the worst sub-index, so one elevated pollutant is never
/// averaged away by calm ones.
pub fn aggregate(sub_indices: &[f64]) -> Result<f64, DashboardError> {
    sub_indices
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(DashboardError::NoData)
}

pub fn status(aqi: f64) -> AqiStatus {
    if aqi <= GOOD_MAX_AQI {
        AqiStatus::Good
    } else if aqi <= MODERATE_MAX_AQI {
        AqiStatus::Moderate
    } else if aqi <= POOR_MAX_AQI {
        AqiStatus::Poor
    } else {
        AqiStatus::VeryPoor
    }
}

/// Map a concentration onto the AQI scale by interpolating linearly inside
/// the pollutant's threshold bands. Tier boundaries land on band boundaries.
pub fn sub_index(pollutant: &str, value: f64) -> Result<f64, DashboardError> {
    let t = Pollutant::from_name(pollutant)?.thresholds();
    let value = value.max(0.0);

    let index = if value <= t.good_max {
        scale(value, 0.0, t.good_max, 0.0, GOOD_MAX_AQI)
    } else if value <= t.moderate_max {
        scale(value, t.good_max, t.moderate_max, GOOD_MAX_AQI, MODERATE_MAX_AQI)
    } else {
        // Poor band slope continues past poor_max up to the ceiling
        scale(value, t.moderate_max, t.poor_max, MODERATE_MAX_AQI, POOR_MAX_AQI)
    };

    Ok(index.min(AQI_CEILING))
}

fn scale(value: f64, lo: f64, hi: f64, index_lo: f64, index_hi: f64) -> f64 {
    index_lo + (value - lo) / (hi - lo) * (index_hi - index_lo)
}
