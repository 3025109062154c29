// Refresh service - runs one pipeline cycle end to end: payload,
// prediction, derivation, publish.
use crate::application::payload_service::PayloadService;
use crate::application::providers::PredictionService;
use crate::application::state::DashboardState;
use crate::domain::derive::derive_snapshot;
use crate::domain::history::HistoryEntry;
use crate::domain::prediction::PredictionResult;
use chrono::Local;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed,
    /// A cycle was already in flight; the trigger was dropped.
    Skipped,
    /// The cycle aborted; the error state is set until the next success.
    Failed,
}

#[derive(Clone)]
pub struct RefreshService {
    payload: PayloadService,
    prediction: Arc<dyn PredictionService>,
    state: Arc<Mutex<DashboardState>>,
}

impl RefreshService {
    pub fn new(
        payload: PayloadService,
        prediction: Arc<dyn PredictionService>,
        state: Arc<Mutex<DashboardState>>,
    ) -> Self {
        Self {
            payload,
            prediction,
            state,
        }
    }

    /// Runs one refresh cycle unless one is already outstanding. Upstream
    /// failures are absorbed by defaults inside the cycle; anything that
    /// still manages to abort it becomes the single user-visible error.
    pub async fn refresh(&self) -> RefreshOutcome {
        if !self.state.lock().await.begin_refresh() {
            tracing::debug!("refresh already in flight, dropping trigger");
            return RefreshOutcome::Skipped;
        }

        match AssertUnwindSafe(self.run_cycle()).catch_unwind().await {
            Ok(()) => RefreshOutcome::Completed,
            Err(_) => {
                tracing::error!("refresh cycle aborted unexpectedly");
                self.state.lock().await.apply_refresh_failed();
                RefreshOutcome::Failed
            }
        }
    }

    async fn run_cycle(&self) {
        let operator = self.state.lock().await.parameters().operator;
        let prepared = self.payload.build(operator).await;

        let prediction = match self.prediction.predict(&prepared.request).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!("prediction service failed, using default throughput: {err}");
                PredictionResult::fallback()
            }
        };

        // Derive against the parameters as they stand now; a change made
        // mid-cycle takes effect from the next cycle's payload.
        let parameters = self.state.lock().await.parameters();
        let snapshot = derive_snapshot(&prediction, &parameters, &prepared.weather);
        let entry = HistoryEntry::capture(
            Local::now().format("%H:%M:%S").to_string(),
            &prediction,
            &snapshot,
        );

        tracing::debug!(
            throughput = prediction.throughput,
            efficiency = snapshot.efficiency_pct,
            "refresh cycle complete"
        );

        self.state
            .lock()
            .await
            .apply_refresh_complete(snapshot, entry, prepared.location, prepared.weather);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::providers::{
        ElevationResolver, LocationProvider, ProviderError, WeatherResolver,
    };
    use crate::application::state::REFRESH_FAILED_MESSAGE;
    use crate::domain::location::LocationSample;
    use crate::domain::metrics::MetricStatus;
    use crate::domain::prediction::PredictionRequest;
    use crate::domain::weather::WeatherSample;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    struct NoLocation;

    #[async_trait]
    impl LocationProvider for NoLocation {
        async fn locate(&self) -> Result<LocationSample, ProviderError> {
            Err(ProviderError::Unavailable("no fix".to_string()))
        }
    }

    struct NoElevation;

    #[async_trait]
    impl ElevationResolver for NoElevation {
        async fn elevation(&self, _: f64, _: f64) -> Result<f64, ProviderError> {
            Err(ProviderError::BadResponse("down".to_string()))
        }
    }

    struct NoWeather;

    #[async_trait]
    impl WeatherResolver for NoWeather {
        async fn weather(&self, _: f64, _: f64) -> Result<WeatherSample, ProviderError> {
            Err(ProviderError::MissingCredential("weather API key"))
        }
    }

    struct FixedPrediction(f64);

    #[async_trait]
    impl PredictionService for FixedPrediction {
        async fn predict(&self, _: &PredictionRequest) -> Result<PredictionResult, ProviderError> {
            Ok(PredictionResult {
                throughput: self.0,
                latency_ms: None,
                jitter_ms: None,
                packet_loss_pct: None,
            })
        }
    }

    struct FailingPrediction;

    #[async_trait]
    impl PredictionService for FailingPrediction {
        async fn predict(&self, _: &PredictionRequest) -> Result<PredictionResult, ProviderError> {
            Err(ProviderError::BadResponse("503".to_string()))
        }
    }

    struct PanickingPrediction;

    #[async_trait]
    impl PredictionService for PanickingPrediction {
        async fn predict(&self, _: &PredictionRequest) -> Result<PredictionResult, ProviderError> {
            panic!("wires crossed");
        }
    }

    /// Signals when a prediction starts, then blocks until released.
    struct GatedPrediction {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl PredictionService for GatedPrediction {
        async fn predict(&self, _: &PredictionRequest) -> Result<PredictionResult, ProviderError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(PredictionResult::fallback())
        }
    }

    fn service_with(
        prediction: Arc<dyn PredictionService>,
    ) -> (RefreshService, Arc<Mutex<DashboardState>>) {
        let state = Arc::new(Mutex::new(DashboardState::new()));
        let payload = PayloadService::new(
            Arc::new(NoLocation),
            Arc::new(NoElevation),
            Arc::new(NoWeather),
        );
        (
            RefreshService::new(payload, prediction, state.clone()),
            state,
        )
    }

    #[tokio::test]
    async fn test_cycle_publishes_snapshot_and_history() {
        let (service, state) = service_with(Arc::new(FixedPrediction(600.0)));

        assert_eq!(service.refresh().await, RefreshOutcome::Completed);

        let view = state.lock().await.view();
        assert_eq!(view.metrics.throughput.status, MetricStatus::Good);
        assert_eq!(view.metrics.signal_quality.value, 43.0);
        assert_eq!(view.history.len(), 1);
        assert_eq!(view.history[0].throughput, 600.0);
        assert_eq!(view.location, Some(LocationSample::fallback()));
        assert_eq!(view.weather, Some(WeatherSample::fallback()));
        assert!(view.error.is_none());
        assert!(!view.refreshing);
    }

    #[tokio::test]
    async fn test_prediction_failure_degrades_to_default() {
        let (service, state) = service_with(Arc::new(FailingPrediction));

        assert_eq!(service.refresh().await, RefreshOutcome::Completed);

        let view = state.lock().await.view();
        // Default throughput of 500 sits in the warning tier (not > 500)
        assert_eq!(view.metrics.throughput.status, MetricStatus::Warning);
        assert_eq!(view.history[0].throughput, 500.0);
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn test_trigger_while_in_flight_is_a_no_op() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let (service, state) = service_with(Arc::new(GatedPrediction {
            entered: entered.clone(),
            release: release.clone(),
        }));

        let first = tokio::spawn({
            let service = service.clone();
            async move { service.refresh().await }
        });

        entered.notified().await;
        assert_eq!(service.refresh().await, RefreshOutcome::Skipped);
        assert_eq!(state.lock().await.view().history.len(), 0);

        release.notify_one();
        assert_eq!(first.await.unwrap(), RefreshOutcome::Completed);
        assert_eq!(state.lock().await.view().history.len(), 1);

        // Gate reopens once the cycle is done
        release.notify_one();
        assert_eq!(service.refresh().await, RefreshOutcome::Completed);
    }

    #[tokio::test]
    async fn test_unexpected_abort_surfaces_error_and_keeps_snapshot() {
        let (service, state) = service_with(Arc::new(PanickingPrediction));
        let before = state.lock().await.view().metrics;

        assert_eq!(service.refresh().await, RefreshOutcome::Failed);

        let view = state.lock().await.view();
        assert_eq!(view.error.as_deref(), Some(REFRESH_FAILED_MESSAGE));
        assert_eq!(view.metrics, before);
        assert!(view.history.is_empty());
        assert!(!view.refreshing);
    }

    #[tokio::test]
    async fn test_error_clears_on_next_success() {
        let (failing, state) = service_with(Arc::new(PanickingPrediction));
        assert_eq!(failing.refresh().await, RefreshOutcome::Failed);
        assert!(state.lock().await.view().error.is_some());

        let payload = PayloadService::new(
            Arc::new(NoLocation),
            Arc::new(NoElevation),
            Arc::new(NoWeather),
        );
        let recovering =
            RefreshService::new(payload, Arc::new(FixedPrediction(600.0)), state.clone());
        assert_eq!(recovering.refresh().await, RefreshOutcome::Completed);
        assert!(state.lock().await.view().error.is_none());
    }
}
