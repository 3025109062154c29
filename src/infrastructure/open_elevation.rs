// Open-Elevation API client
use crate::application::providers::{ElevationResolver, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct OpenElevationClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

impl OpenElevationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ElevationResolver for OpenElevationClient {
    async fn elevation(&self, latitude: f64, longitude: f64) -> Result<f64, ProviderError> {
        let url = format!(
            "{}/api/v1/lookup?locations={},{}",
            self.base_url, latitude, longitude
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::BadResponse(format!(
                "elevation lookup returned {}",
                response.status()
            )));
        }

        let data = response.json::<LookupResponse>().await?;
        let first = data.results.first().ok_or_else(|| {
            ProviderError::BadResponse("elevation response had no results".to_string())
        })?;

        Ok(first.elevation)
    }
}
