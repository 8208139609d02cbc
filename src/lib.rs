//! Collision-free layout engine for remote whiteboard widgets.
//!
//! The engine assigns each new rectangular widget a position on an
//! unbounded 2D plane such that it never overlaps a previously committed
//! widget, searching outward from a caller-supplied preferred point. The
//! modules follow the RSB `MODULE_SPEC` pattern: each area exposes its
//! types through a `mod.rs` orchestrator while implementations live in
//! private `core` modules.
//!
//! Remote concerns (auth, HTTP retries, text sanitization) belong to the
//! caller; the engine only decides *where* a widget goes.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod style;
pub mod zone;

pub use error::{LayoutError, Result};
pub use geometry::{Point, Size, WidgetBounds};
pub use layout::{GridLayout, LayoutEngine, PlacementConfig, SharedLayoutEngine, ring_positions};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{MetricSnapshot, PlacementMetrics};
pub use registry::{WidgetContent, WidgetId, WidgetRegistry, WidgetState};
pub use style::{NoteSize, VisualCategory};
pub use zone::{ZoneDescriptor, ZoneId, ZoneMap};
