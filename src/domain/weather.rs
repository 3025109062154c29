// Weather conditions domain model
use serde::Serialize;

/// Conditions at the current location. Replaced wholesale each refresh
/// cycle; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
}

impl WeatherSample {
    pub fn new(temperature_c: f64, humidity_pct: f64, wind_speed_mps: f64, pressure_hpa: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            wind_speed_mps,
            pressure_hpa,
        }
    }

    /// Conditions substituted when the weather service is unreachable.
    pub fn fallback() -> Self {
        Self {
            temperature_c: 25.0,
            humidity_pct: 60.0,
            wind_speed_mps: 5.0,
            pressure_hpa: 1013.0,
        }
    }
}
