// Provider traits for the external data sources feeding the pipeline
use crate::domain::location::LocationSample;
use crate::domain::prediction::{PredictionRequest, PredictionResult};
use crate::domain::weather::WeatherSample;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of an upstream data source. These are expected conditions:
/// callers recover with fixed defaults instead of propagating them.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("unexpected response: {0}")]
    BadResponse(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Current position fix; altitude may be unresolved.
    async fn locate(&self) -> Result<LocationSample, ProviderError>;
}

#[async_trait]
pub trait ElevationResolver: Send + Sync {
    /// Ground elevation in meters at the given coordinates.
    async fn elevation(&self, latitude: f64, longitude: f64) -> Result<f64, ProviderError>;
}

#[async_trait]
pub trait WeatherResolver: Send + Sync {
    /// Current conditions at the given coordinates.
    async fn weather(&self, latitude: f64, longitude: f64) -> Result<WeatherSample, ProviderError>;
}

#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Predicted throughput for a composed payload.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ProviderError>;
}
