use std::sync::{Arc, Mutex};

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Size, WidgetBounds};
use crate::metrics::MetricSnapshot;
use crate::registry::WidgetId;
use crate::zone::ZoneId;

use super::core::LayoutEngine;

/// Cloneable handle serializing placement decisions across threads.
///
/// A placement decision reads the full committed set before it commits, so
/// the check and the insert must be atomic as a pair. The handle holds the
/// engine behind one mutex and runs each operation inside the critical
/// section; callers issue their remote creation calls after the lock is
/// released.
#[derive(Clone)]
pub struct SharedLayoutEngine {
    inner: Arc<Mutex<LayoutEngine>>,
}

impl SharedLayoutEngine {
    pub fn new(engine: LayoutEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn place(
        &self,
        id: impl Into<WidgetId>,
        preferred: Point,
        size: Size,
        zone: Option<ZoneId>,
    ) -> Result<Point> {
        self.lock()?.place(id, preferred, size, zone)
    }

    pub fn remove(&self, id: &str) -> Result<Option<WidgetBounds>> {
        Ok(self.lock()?.remove(id))
    }

    pub fn reset(&self) -> Result<()> {
        self.lock()?.reset();
        Ok(())
    }

    pub fn metrics(&self) -> Result<MetricSnapshot> {
        Ok(self.lock()?.metrics())
    }

    /// Run a closure against the locked engine, for registry inspection or
    /// content updates.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut LayoutEngine) -> R) -> Result<R> {
        Ok(f(&mut *self.lock()?))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, LayoutEngine>> {
        self.inner.lock().map_err(|_| LayoutError::LockPoisoned)
    }
}
