use serde_json::json;

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Size, WidgetBounds};
use crate::logging::{LogEvent, LogLevel, Logger};
use crate::metrics::{MetricSnapshot, PlacementMetrics};
use crate::registry::{WidgetId, WidgetRegistry};
use crate::zone::ZoneId;

const LOG_TARGET: &str = "board.layout";

/// Search parameters for collision resolution.
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Radius increment per search ring, in plane units.
    pub step: f64,
    /// Angular increment between candidates on a ring, in degrees.
    /// Candidates are probed in ascending order starting at 0°.
    pub angle_step_deg: u32,
    /// Minimum clearance required between any two committed bounds.
    /// Implemented by inflating both rects by `margin / 2` before the
    /// overlap test; zero restores the plain strict-overlap test.
    pub margin: f64,
    /// Ring count after which the search gives up with
    /// [`LayoutError::PlacementFailed`]. `None` searches without bound,
    /// which still terminates for a finite registry.
    pub max_radius_steps: Option<u32>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            step: 50.0,
            angle_step_deg: 30,
            margin: 30.0,
            max_radius_steps: Some(50),
        }
    }
}

impl PlacementConfig {
    fn angles_deg(&self) -> Vec<u32> {
        let step = self.angle_step_deg.clamp(1, 359) as usize;
        (0..360).step_by(step).collect()
    }
}

/// Collision-free placement engine for one board.
///
/// Owns the registry of committed bounds so the test-then-commit pair is a
/// single synchronous call. Each engine is independent; multiple boards in
/// one process each get their own instance. For concurrent callers wrap the
/// engine in [`super::SharedLayoutEngine`].
pub struct LayoutEngine {
    config: PlacementConfig,
    registry: WidgetRegistry,
    logger: Option<Logger>,
    metrics: PlacementMetrics,
}

impl LayoutEngine {
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            config,
            registry: WidgetRegistry::new(),
            logger: None,
            metrics: PlacementMetrics::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Find and commit a collision-free position for a new widget.
    ///
    /// Returns the preferred point unchanged when it is free. Otherwise
    /// probes rings of radius `step, 2*step, …` around the preferred
    /// point, sampling each ring at `angle_step_deg` increments from 0°,
    /// and commits the first free candidate. The search order is fully
    /// deterministic for a given registry state and config.
    pub fn place(
        &mut self,
        id: impl Into<WidgetId>,
        preferred: Point,
        size: Size,
        zone: Option<ZoneId>,
    ) -> Result<Point> {
        if !size.is_positive() {
            return Err(LayoutError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }

        let mut probes: u64 = 1;
        let candidate = WidgetBounds::from_parts(preferred, size);
        if self.is_free(&candidate, zone.as_ref()) {
            return Ok(self.commit(id.into(), candidate, zone, preferred, probes));
        }

        let angles = self.config.angles_deg();
        let mut ring: u32 = 0;
        loop {
            ring += 1;
            if let Some(max) = self.config.max_radius_steps {
                if ring > max {
                    let radius = self.config.step * max as f64;
                    self.metrics.record_failure(probes);
                    self.log(
                        LogLevel::Warn,
                        "placement_exhausted",
                        &[
                            ("preferred_x", json!(preferred.x)),
                            ("preferred_y", json!(preferred.y)),
                            ("radius", json!(radius)),
                            ("probes", json!(probes)),
                        ],
                    );
                    return Err(LayoutError::PlacementFailed { radius });
                }
            }

            let radius = self.config.step * ring as f64;
            for &angle_deg in &angles {
                let theta = (angle_deg as f64).to_radians();
                let origin = preferred.offset(radius * theta.cos(), radius * theta.sin());
                let candidate = WidgetBounds::from_parts(origin, size);
                probes += 1;
                if self.is_free(&candidate, zone.as_ref()) {
                    return Ok(self.commit(id.into(), candidate, zone, preferred, probes));
                }
            }
        }
    }

    /// Drop a committed widget, freeing its slot. Removing an id twice is
    /// a routine no-op.
    pub fn remove(&mut self, id: &str) -> Option<WidgetBounds> {
        let removed = self.registry.remove(id);
        if removed.is_some() {
            self.metrics.record_removal();
            self.log(LogLevel::Debug, "widget_removed", &[("widget", json!(id))]);
        }
        removed
    }

    /// Clear the whole board.
    pub fn reset(&mut self) {
        let count = self.registry.len();
        self.registry.clear();
        self.log(LogLevel::Info, "board_reset", &[("widgets", json!(count))]);
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }

    fn is_free(&self, candidate: &WidgetBounds, zone: Option<&ZoneId>) -> bool {
        let clearance = self.config.margin / 2.0;
        let inflated = candidate.inflate(clearance);
        self.registry
            .bounds_in_scope(zone)
            .all(|existing| !inflated.overlaps(&existing.inflate(clearance)))
    }

    fn commit(
        &mut self,
        id: WidgetId,
        bounds: WidgetBounds,
        zone: Option<ZoneId>,
        preferred: Point,
        probes: u64,
    ) -> Point {
        let origin = bounds.origin();
        let displaced = probes > 1;
        self.metrics.record_placement(probes, displaced);
        self.log(
            LogLevel::Info,
            "widget_placed",
            &[
                ("widget", json!(id)),
                ("x", json!(origin.x)),
                ("y", json!(origin.y)),
                ("preferred_x", json!(preferred.x)),
                ("preferred_y", json!(preferred.y)),
                ("probes", json!(probes)),
            ],
        );
        self.registry.insert(id, bounds, zone);
        origin
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, serde_json::Value)]) {
        // A broken sink must not fail a placement that already committed.
        if let Some(logger) = &self.logger {
            let mut map = crate::logging::LogFields::new();
            for (key, value) in fields {
                map.insert((*key).to_string(), value.clone());
            }
            let _ = logger.log_event(LogEvent::with_fields(level, LOG_TARGET, message, map));
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::logging::MemorySink;

    fn engine() -> LayoutEngine {
        LayoutEngine::default()
    }

    fn note() -> Size {
        Size::new(200.0, 150.0)
    }

    #[test]
    fn empty_board_returns_preferred_exactly() {
        let mut engine = engine();
        let placed = engine
            .place("a", Point::new(100.0, 100.0), note(), None)
            .unwrap();
        assert_eq!(placed, Point::new(100.0, 100.0));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut engine = engine();
        let err = engine
            .place("a", Point::new(0.0, 0.0), Size::new(0.0, 150.0), None)
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimensions { .. }));

        let err = engine
            .place("a", Point::new(0.0, 0.0), Size::new(200.0, -1.0), None)
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn second_widget_is_displaced_clear_of_the_first() {
        let mut engine = engine();
        let preferred = Point::new(100.0, 100.0);
        let first = engine.place("a", preferred, note(), None).unwrap();
        let second = engine.place("b", preferred, note(), None).unwrap();

        assert_eq!(first, preferred);
        assert_ne!(second, preferred);

        let a = engine.registry().bounds_of("a").unwrap();
        let b = engine.registry().bounds_of("b").unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.gap_to(&b) >= engine.config().margin - 1e-9);
    }

    #[test]
    fn collision_resolution_is_deterministic() {
        let run = || {
            let mut engine = LayoutEngine::new(PlacementConfig::default());
            let preferred = Point::new(250.0, 250.0);
            let mut placed = Vec::new();
            for id in ["a", "b", "c", "d"] {
                placed.push(engine.place(id, preferred, note(), None).unwrap());
            }
            placed
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn pairwise_no_overlap_holds_over_a_contended_sequence() {
        let mut engine = engine();
        let preferred = Point::new(0.0, 0.0);
        for i in 0..10 {
            engine
                .place(format!("w{i}"), preferred, note(), None)
                .unwrap();
        }

        let all: Vec<_> = engine.registry().bounds_in_scope(None).copied().collect();
        assert_eq!(all.len(), 10);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.overlaps(b));
                assert!(a.gap_to(b) >= engine.config().margin - 1e-9);
            }
        }
    }

    #[test]
    fn removal_frees_the_preferred_slot() {
        let mut engine = engine();
        let preferred = Point::new(400.0, 300.0);
        let first = engine.place("a", preferred, note(), None).unwrap();
        assert_eq!(first, preferred);

        assert!(engine.remove("a").is_some());
        assert!(engine.remove("a").is_none());

        let again = engine.place("b", preferred, note(), None).unwrap();
        assert_eq!(again, preferred);
    }

    #[test]
    fn ninth_widget_escapes_a_tight_cluster() {
        let mut engine = engine();
        let center = Point::new(500.0, 500.0);
        // Eight widgets ringed tightly around the center, plus the center
        // itself occupied.
        engine.place("hub", center, note(), None).unwrap();
        for i in 0..8 {
            let theta = (i as f64) * std::f64::consts::FRAC_PI_4;
            let preferred = center.offset(120.0 * theta.cos(), 120.0 * theta.sin());
            engine
                .place(format!("ring{i}"), preferred, note(), None)
                .unwrap();
        }

        let placed = engine.place("ninth", center, note(), None).unwrap();
        assert_ne!(placed, center);

        let ninth = engine.registry().bounds_of("ninth").unwrap();
        for i in 0..8 {
            let other = engine.registry().bounds_of(&format!("ring{i}")).unwrap();
            assert!(!ninth.overlaps(&other));
        }
        assert!(!ninth.overlaps(&engine.registry().bounds_of("hub").unwrap()));
    }

    #[test]
    fn bounded_search_fails_without_touching_the_registry() {
        let config = PlacementConfig {
            max_radius_steps: Some(1),
            ..PlacementConfig::default()
        };
        let mut engine = LayoutEngine::new(config);
        // One slab covering the preferred point and the entire first ring.
        engine.registry_mut().insert(
            "slab".to_string(),
            WidgetBounds::new(-400.0, -400.0, 800.0, 800.0),
            None,
        );

        let err = engine
            .place("a", Point::new(0.0, 0.0), Size::new(50.0, 50.0), None)
            .unwrap_err();
        assert!(matches!(err, LayoutError::PlacementFailed { radius } if radius == 50.0));
        assert_eq!(engine.registry().len(), 1);
        assert_eq!(engine.metrics().failures, 1);
    }

    #[test]
    fn zone_scopes_keep_diagrams_independent() {
        let mut engine = engine();
        let preferred = Point::new(100.0, 100.0);
        engine
            .place("flow", preferred, note(), Some("flow".to_string()))
            .unwrap();

        // Same coordinates, different zone: no displacement.
        let placed = engine
            .place("kanban", preferred, note(), Some("kanban".to_string()))
            .unwrap();
        assert_eq!(placed, preferred);

        // Same zone: displaced as usual.
        let displaced = engine
            .place("flow2", preferred, note(), Some("flow".to_string()))
            .unwrap();
        assert_ne!(displaced, preferred);
    }

    #[test]
    fn zero_margin_allows_adjacent_widgets() {
        let config = PlacementConfig {
            margin: 0.0,
            ..PlacementConfig::default()
        };
        let mut engine = LayoutEngine::new(config);
        engine.registry_mut().insert(
            "left".to_string(),
            WidgetBounds::new(0.0, 0.0, 100.0, 100.0),
            None,
        );

        // Edge-touching is not overlap, so the preferred point is free.
        let placed = engine
            .place("right", Point::new(100.0, 0.0), Size::new(100.0, 100.0), None)
            .unwrap();
        assert_eq!(placed, Point::new(100.0, 0.0));
    }

    #[test]
    fn placements_emit_structured_events() {
        let sink = Arc::new(MemorySink::new());
        let mut engine = LayoutEngine::default().with_logger(Logger::new(sink.clone()));

        let preferred = Point::new(0.0, 0.0);
        engine.place("a", preferred, note(), None).unwrap();
        engine.place("b", preferred, note(), None).unwrap();
        engine.remove("a");

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].message, "widget_placed");
        assert_eq!(events[0].fields.get("probes"), Some(&json!(1)));
        assert_eq!(events[1].message, "widget_placed");
        assert!(events[1].fields.get("probes").unwrap().as_u64().unwrap() > 1);
        assert_eq!(events[2].message, "widget_removed");

        let snapshot = engine.metrics();
        assert_eq!(snapshot.placements, 2);
        assert_eq!(snapshot.collisions_resolved, 1);
        assert_eq!(snapshot.removals, 1);
    }
}
