use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by the placement engine.
#[derive(Debug, Default, Clone)]
pub struct PlacementMetrics {
    placements: u64,
    collisions_resolved: u64,
    probes: u64,
    failures: u64,
    removals: u64,
}

impl PlacementMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement(&mut self, probes: u64, displaced: bool) {
        self.placements = self.placements.saturating_add(1);
        self.probes = self.probes.saturating_add(probes);
        if displaced {
            self.collisions_resolved = self.collisions_resolved.saturating_add(1);
        }
    }

    pub fn record_failure(&mut self, probes: u64) {
        self.failures = self.failures.saturating_add(1);
        self.probes = self.probes.saturating_add(probes);
    }

    pub fn record_removal(&mut self) {
        self.removals = self.removals.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            placements: self.placements,
            collisions_resolved: self.collisions_resolved,
            probes: self.probes,
            failures: self.failures,
            removals: self.removals,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub placements: u64,
    pub collisions_resolved: u64,
    pub probes: u64,
    pub failures: u64,
    pub removals: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "placement_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("placements".to_string(), json!(self.placements));
        map.insert(
            "collisions_resolved".to_string(),
            json!(self.collisions_resolved),
        );
        map.insert("probes".to_string(), json!(self.probes));
        map.insert("failures".to_string(), json!(self.failures));
        map.insert("removals".to_string(), json!(self.removals));
        map
    }
}
