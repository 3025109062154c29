// OpenWeatherMap API client
use crate::application::providers::{ProviderError, WeatherResolver};
use crate::domain::weather::WeatherSample;
use async_trait::async_trait;
use serde::Deserialize;

/// Placeholder shipped in sample configs; treated the same as no key at
/// all so a fresh checkout degrades to default conditions instead of
/// hammering the API with a junk credential.
const PLACEHOLDER_API_KEY: &str = "your_openweather_api_key";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainConditions,
    wind: WindConditions,
}

#[derive(Debug, Deserialize)]
struct MainConditions {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct WindConditions {
    speed: f64,
}

impl OpenWeatherClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn credential(&self) -> Result<&str, ProviderError> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(ProviderError::MissingCredential("weather API key"));
        }
        Ok(&self.api_key)
    }
}

#[async_trait]
impl WeatherResolver for OpenWeatherClient {
    async fn weather(&self, latitude: f64, longitude: f64) -> Result<WeatherSample, ProviderError> {
        let api_key = self.credential()?;
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, api_key
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::BadResponse(format!(
                "weather lookup returned {}",
                response.status()
            )));
        }

        let data = response.json::<WeatherResponse>().await?;
        Ok(WeatherSample::new(
            data.main.temp,
            data.main.humidity,
            data.wind.speed,
            data.main.pressure,
        ))
    }
}
