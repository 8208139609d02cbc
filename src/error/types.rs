use thiserror::Error;

/// Unified result type for the board MVP crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the placement engine.
///
/// All variants are recoverable; none of them leave the registry in a
/// partially committed state.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid widget dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("no free slot within search radius {radius}")]
    PlacementFailed { radius: f64 },
    #[error("widget `{0}` not found")]
    UnknownWidget(String),
    #[error("zone `{0}` not found")]
    ZoneNotFound(String),
    #[error("engine lock poisoned")]
    LockPoisoned,
}
