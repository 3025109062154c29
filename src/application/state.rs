// Dashboard state container - one update function per event type, so the
// pipeline is testable without timers or sockets and consumers never see
// a half-applied cycle.
use crate::domain::history::{HistoryBuffer, HistoryEntry};
use crate::domain::location::LocationSample;
use crate::domain::metrics::MetricSnapshot;
use crate::domain::network::{NetworkParameters, ParameterError};
use crate::domain::weather::WeatherSample;
use serde::Serialize;

/// Shown when a cycle dies for an unclassified reason.
pub const REFRESH_FAILED_MESSAGE: &str =
    "Failed to fetch data. Please check your connection and try again.";

#[derive(Debug)]
pub struct DashboardState {
    parameters: NetworkParameters,
    snapshot: MetricSnapshot,
    history: HistoryBuffer,
    location: Option<LocationSample>,
    weather: Option<WeatherSample>,
    error: Option<String>,
    refreshing: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of everything the presentation layer reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub metrics: MetricSnapshot,
    pub history: Vec<HistoryEntry>,
    pub parameters: NetworkParameters,
    pub location: Option<LocationSample>,
    pub weather: Option<WeatherSample>,
    pub error: Option<String>,
    pub refreshing: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            parameters: NetworkParameters::default(),
            snapshot: MetricSnapshot::initial(),
            history: HistoryBuffer::new(),
            location: None,
            weather: None,
            error: None,
            refreshing: false,
        }
    }

    pub fn parameters(&self) -> NetworkParameters {
        self.parameters.clone()
    }

    /// Busy gate. Returns false when a cycle is already in flight; the
    /// caller must then drop the trigger.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    pub fn apply_parameter_change(
        &mut self,
        name: &str,
        value: f64,
    ) -> Result<NetworkParameters, ParameterError> {
        self.parameters.apply(name, value)?;
        Ok(self.parameters.clone())
    }

    /// Publishes a completed cycle in one step and clears any prior error.
    pub fn apply_refresh_complete(
        &mut self,
        snapshot: MetricSnapshot,
        entry: HistoryEntry,
        location: LocationSample,
        weather: WeatherSample,
    ) {
        self.snapshot = snapshot;
        self.history.push(entry);
        self.location = Some(location);
        self.weather = Some(weather);
        self.error = None;
        self.refreshing = false;
    }

    /// Surfaces the error and keeps the previous snapshot on display until
    /// the next successful cycle.
    pub fn apply_refresh_failed(&mut self) {
        self.error = Some(REFRESH_FAILED_MESSAGE.to_string());
        self.refreshing = false;
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            metrics: self.snapshot.clone(),
            history: self.history.to_vec(),
            parameters: self.parameters.clone(),
            location: self.location.clone(),
            weather: self.weather.clone(),
            error: self.error.clone(),
            refreshing: self.refreshing,
        }
    }
}
