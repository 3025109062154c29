// Payload builder - composes the prediction request for one cycle,
// masking each upstream failure with its documented default so a
// complete payload always comes out.
use crate::application::providers::{ElevationResolver, LocationProvider, WeatherResolver};
use crate::domain::location::LocationSample;
use crate::domain::network::Operator;
use crate::domain::prediction::PredictionRequest;
use crate::domain::weather::WeatherSample;
use chrono::{Local, Timelike};
use std::sync::Arc;

/// A fully resolved payload plus the inputs it was built from, kept for
/// display on the dashboard.
#[derive(Debug, Clone)]
pub struct PreparedPayload {
    pub request: PredictionRequest,
    pub location: LocationSample,
    pub weather: WeatherSample,
}

#[derive(Clone)]
pub struct PayloadService {
    location: Arc<dyn LocationProvider>,
    elevation: Arc<dyn ElevationResolver>,
    weather: Arc<dyn WeatherResolver>,
}

impl PayloadService {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        elevation: Arc<dyn ElevationResolver>,
        weather: Arc<dyn WeatherResolver>,
    ) -> Self {
        Self {
            location,
            elevation,
            weather,
        }
    }

    /// Builds the payload for one refresh cycle. Never fails: location,
    /// elevation, and weather each degrade to a constant on error, so
    /// downstream stages see a complete, in-range payload.
    pub async fn build(&self, operator: Operator) -> PreparedPayload {
        let mut location = match self.location.locate().await {
            Ok(sample) => sample,
            Err(err) => {
                tracing::warn!("position source unavailable, using default fix: {err}");
                LocationSample::fallback()
            }
        };

        if location.altitude.is_none() {
            location.altitude = match self
                .elevation
                .elevation(location.latitude, location.longitude)
                .await
            {
                Ok(meters) => Some(meters),
                Err(err) => {
                    tracing::warn!("elevation lookup failed, defaulting to 0: {err}");
                    Some(0.0)
                }
            };
        }

        let weather = match self
            .weather
            .weather(location.latitude, location.longitude)
            .await
        {
            Ok(sample) => sample,
            Err(err) => {
                tracing::warn!("weather lookup failed, using default conditions: {err}");
                WeatherSample::fallback()
            }
        };

        let now = Local::now();
        let request = PredictionRequest {
            timestamp: now.timestamp(),
            latitude: location.latitude,
            longitude: location.longitude,
            altitude: location.altitude.unwrap_or(0.0),
            speed_kmh: location.speed_kmh(),
            hour: now.hour(),
            temperature: weather.temperature_c,
            humidity: weather.humidity_pct,
            wind_speed: weather.wind_speed_mps,
            pressure: weather.pressure_hpa,
            operator: operator.id(),
        };

        PreparedPayload {
            request,
            location,
            weather,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::providers::ProviderError;
    use async_trait::async_trait;

    struct NoLocation;

    #[async_trait]
    impl LocationProvider for NoLocation {
        async fn locate(&self) -> Result<LocationSample, ProviderError> {
            Err(ProviderError::Unavailable("no fix".to_string()))
        }
    }

    struct FixedLocation(LocationSample);

    #[async_trait]
    impl LocationProvider for FixedLocation {
        async fn locate(&self) -> Result<LocationSample, ProviderError> {
            Ok(self.0.clone())
        }
    }

    struct NoElevation;

    #[async_trait]
    impl ElevationResolver for NoElevation {
        async fn elevation(&self, _: f64, _: f64) -> Result<f64, ProviderError> {
            Err(ProviderError::BadResponse("boom".to_string()))
        }
    }

    struct FixedElevation(f64);

    #[async_trait]
    impl ElevationResolver for FixedElevation {
        async fn elevation(&self, _: f64, _: f64) -> Result<f64, ProviderError> {
            Ok(self.0)
        }
    }

    struct NoWeather;

    #[async_trait]
    impl WeatherResolver for NoWeather {
        async fn weather(&self, _: f64, _: f64) -> Result<WeatherSample, ProviderError> {
            Err(ProviderError::MissingCredential("weather API key"))
        }
    }

    struct FixedWeather(WeatherSample);

    #[async_trait]
    impl WeatherResolver for FixedWeather {
        async fn weather(&self, _: f64, _: f64) -> Result<WeatherSample, ProviderError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_total_upstream_failure_still_yields_payload() {
        let service = PayloadService::new(
            Arc::new(NoLocation),
            Arc::new(NoElevation),
            Arc::new(NoWeather),
        );

        let prepared = service.build(Operator::Jio).await;
        let fix = LocationSample::fallback();

        assert_eq!(prepared.request.latitude, fix.latitude);
        assert_eq!(prepared.request.longitude, fix.longitude);
        assert_eq!(prepared.request.altitude, 0.0);
        assert_eq!(prepared.request.speed_kmh, 0.0);
        assert_eq!(prepared.weather, WeatherSample::fallback());
        assert_eq!(prepared.request.temperature, 25.0);
        assert_eq!(prepared.request.humidity, 60.0);
        assert_eq!(prepared.request.wind_speed, 5.0);
        assert_eq!(prepared.request.pressure, 1013.0);
        assert_eq!(prepared.request.operator, 1);
        assert!(prepared.request.hour <= 23);
        assert!(prepared.request.timestamp > 0);
    }

    #[tokio::test]
    async fn test_missing_altitude_is_resolved() {
        let service = PayloadService::new(
            Arc::new(FixedLocation(LocationSample::new(12.9716, 77.5946, None, 10.0))),
            Arc::new(FixedElevation(920.0)),
            Arc::new(NoWeather),
        );

        let prepared = service.build(Operator::Airtel).await;
        assert_eq!(prepared.request.altitude, 920.0);
        assert_eq!(prepared.location.altitude, Some(920.0));
        assert_eq!(prepared.request.speed_kmh, 36.0);
        assert_eq!(prepared.request.operator, 2);
    }

    #[tokio::test]
    async fn test_elevation_failure_defaults_to_zero() {
        let service = PayloadService::new(
            Arc::new(FixedLocation(LocationSample::new(12.9716, 77.5946, None, 0.0))),
            Arc::new(NoElevation),
            Arc::new(NoWeather),
        );

        let prepared = service.build(Operator::Jio).await;
        assert_eq!(prepared.request.altitude, 0.0);
    }

    #[tokio::test]
    async fn test_supplied_altitude_skips_resolver() {
        // The resolver errors, but it must never be consulted here.
        let service = PayloadService::new(
            Arc::new(FixedLocation(LocationSample::new(12.9716, 77.5946, Some(840.0), 0.0))),
            Arc::new(NoElevation),
            Arc::new(FixedWeather(WeatherSample::new(31.0, 40.0, 2.0, 1008.0))),
        );

        let prepared = service.build(Operator::Jio).await;
        assert_eq!(prepared.request.altitude, 840.0);
        assert_eq!(prepared.request.temperature, 31.0);
        assert_eq!(prepared.request.pressure, 1008.0);
    }
}
