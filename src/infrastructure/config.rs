use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct QosConfig {
    pub server: ServerSettings,
    pub refresh: RefreshSettings,
    pub prediction: PredictionSettings,
    pub weather: WeatherSettings,
    pub elevation: ElevationSettings,
    #[serde(default)]
    pub location: Option<LocationSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ElevationSettings {
    pub base_url: String,
}

/// Fixed position for deployments without a live position source.
#[derive(Debug, Deserialize, Clone)]
pub struct LocationSettings {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub speed_mps: f64,
}

pub fn load_qos_config() -> anyhow::Result<QosConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/qos"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
