// Rolling history of derived samples for charting
use crate::domain::metrics::MetricSnapshot;
use crate::domain::prediction::PredictionResult;
use serde::Serialize;
use std::collections::VecDeque;

/// Number of samples the charts keep.
pub const HISTORY_CAPACITY: usize = 10;

/// A point-in-time copy of one cycle's results. Throughput is recorded
/// raw, not in its display unit, so the chart keeps full resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub time_label: String,
    pub throughput: f64,
    pub signal_quality: f64,
    pub network_load: f64,
    pub connection_stability: f64,
}

impl HistoryEntry {
    pub fn capture(time_label: String, prediction: &PredictionResult, snapshot: &MetricSnapshot) -> Self {
        Self {
            time_label,
            throughput: prediction.throughput,
            signal_quality: snapshot.signal_quality.value,
            network_load: snapshot.network_load.value,
            connection_stability: snapshot.connection_stability.value,
        }
    }
}

/// Sliding window over the most recent entries, oldest first. Appending at
/// capacity drops the oldest entry.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
