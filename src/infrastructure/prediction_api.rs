// Throughput-prediction API client
use crate::application::providers::{PredictionService, ProviderError};
use crate::domain::prediction::{PredictionRequest, PredictionResult};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct PredictionApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PredictionApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

/// The endpoint is untrusted: a missing or non-numeric `throughput` reads
/// as 0 rather than an error.
fn parse_prediction(body: &Value) -> PredictionResult {
    let field = |name: &str| body.get(name).and_then(Value::as_f64);

    PredictionResult {
        throughput: field("throughput").unwrap_or(0.0),
        latency_ms: field("latency"),
        jitter_ms: field("jitter"),
        packet_loss_pct: field("packetLoss"),
    }
}

#[async_trait]
impl PredictionService for PredictionApiClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ProviderError> {
        let url = format!("{}/predict", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::BadResponse(format!(
                "prediction endpoint returned {}",
                response.status()
            )));
        }

        let body = response.json::<Value>().await?;
        tracing::debug!(%body, "prediction response");

        Ok(parse_prediction(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_response() {
        let body = json!({
            "throughput": 612.5,
            "latency": 38.0,
            "jitter": 4.2,
            "packetLoss": 0.5,
            "unit": "Mbps",
            "status": "success"
        });

        let result = parse_prediction(&body);
        assert_eq!(result.throughput, 612.5);
        assert_eq!(result.latency_ms, Some(38.0));
        assert_eq!(result.jitter_ms, Some(4.2));
        assert_eq!(result.packet_loss_pct, Some(0.5));
    }

    #[test]
    fn test_missing_throughput_defaults_to_zero() {
        let result = parse_prediction(&json!({ "status": "success" }));
        assert_eq!(result.throughput, 0.0);
        assert_eq!(result.latency_ms, None);
    }

    #[test]
    fn test_non_numeric_throughput_defaults_to_zero() {
        let result = parse_prediction(&json!({ "throughput": "fast" }));
        assert_eq!(result.throughput, 0.0);
    }
}
