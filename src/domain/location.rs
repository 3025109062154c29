// Device location domain model
use serde::Serialize;

/// A single position fix. `altitude` stays `None` until resolved, either by
/// the position source itself or by the elevation resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    #[serde(rename = "speedMetersPerSecond")]
    pub speed_mps: f64,
}

impl LocationSample {
    pub fn new(latitude: f64, longitude: f64, altitude: Option<f64>, speed_mps: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            speed_mps,
        }
    }

    /// Fix substituted when no position source is available.
    pub fn fallback() -> Self {
        Self {
            latitude: 37.7749,
            longitude: -122.4194,
            altitude: Some(0.0),
            speed_mps: 0.0,
        }
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_mps * 3.6
    }
}
