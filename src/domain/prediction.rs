// Prediction request and result models
use serde::Serialize;

/// Wire payload for the throughput-prediction endpoint. Field names match
/// the feature names the model was trained on, casing included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub timestamp: i64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Altitude")]
    pub altitude: f64,
    pub speed_kmh: f64,
    #[serde(rename = "Hour")]
    pub hour: u32,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
    pub pressure: f64,
    pub operator: u8,
}

/// One throughput prediction. The latency/jitter/loss fields ride along
/// from the endpoint but play no part in metric derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub throughput: f64,
    pub latency_ms: Option<f64>,
    pub jitter_ms: Option<f64>,
    pub packet_loss_pct: Option<f64>,
}

impl PredictionResult {
    /// Conservative result substituted when the prediction service is down.
    pub fn fallback() -> Self {
        Self {
            throughput: 500.0,
            latency_ms: Some(50.0),
            jitter_ms: Some(10.0),
            packet_loss_pct: Some(2.0),
        }
    }
}
