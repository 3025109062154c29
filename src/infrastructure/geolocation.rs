// Config-backed position provider
use crate::application::providers::{LocationProvider, ProviderError};
use crate::domain::location::LocationSample;
use crate::infrastructure::config::LocationSettings;
use async_trait::async_trait;

/// Serves the position fix configured for this deployment. Deployments
/// without one fail here and pick up the default fix downstream.
#[derive(Debug, Clone)]
pub struct StaticLocationProvider {
    fix: Option<LocationSettings>,
}

impl StaticLocationProvider {
    pub fn new(fix: Option<LocationSettings>) -> Self {
        Self { fix }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn locate(&self) -> Result<LocationSample, ProviderError> {
        let fix = self
            .fix
            .as_ref()
            .ok_or_else(|| ProviderError::Unavailable("no location fix configured".to_string()))?;

        Ok(LocationSample::new(
            fix.latitude,
            fix.longitude,
            fix.altitude,
            fix.speed_mps,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_provider_fails() {
        let provider = StaticLocationProvider::new(None);
        assert!(provider.locate().await.is_err());
    }

    #[tokio::test]
    async fn test_configured_fix_passes_through() {
        let provider = StaticLocationProvider::new(Some(LocationSettings {
            latitude: 12.9716,
            longitude: 77.5946,
            altitude: None,
            speed_mps: 0.0,
        }));

        let sample = provider.locate().await.unwrap();
        assert_eq!(sample.latitude, 12.9716);
        assert_eq!(sample.altitude, None);
    }
}
