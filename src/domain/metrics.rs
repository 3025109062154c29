// Displayable metric models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Warning,
    Critical,
}

/// A metric ready for display: a value with its unit, a bar position in
/// [0, 100], and a three-tier status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundedMetric {
    pub value: f64,
    pub unit: &'static str,
    pub progress_pct: u8,
    pub status: MetricStatus,
}

/// The full set of derived metrics for one refresh cycle. Always published
/// as a unit; consumers never see a half-updated snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSnapshot {
    pub throughput: BoundedMetric,
    pub signal_quality: BoundedMetric,
    pub network_load: BoundedMetric,
    pub connection_stability: BoundedMetric,
    pub efficiency_pct: u8,
}

impl MetricSnapshot {
    /// Seed values shown before the first refresh cycle completes.
    pub fn initial() -> Self {
        Self {
            throughput: BoundedMetric {
                value: 850.0,
                unit: "Mbps",
                progress_pct: 85,
                status: MetricStatus::Good,
            },
            signal_quality: BoundedMetric {
                value: 75.0,
                unit: "%",
                progress_pct: 75,
                status: MetricStatus::Good,
            },
            network_load: BoundedMetric {
                value: 45.0,
                unit: "%",
                progress_pct: 55,
                status: MetricStatus::Good,
            },
            connection_stability: BoundedMetric {
                value: 90.0,
                unit: "%",
                progress_pct: 90,
                status: MetricStatus::Good,
            },
            efficiency_pct: 82,
        }
    }
}
