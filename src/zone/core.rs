use std::collections::HashMap;

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, WidgetBounds};

pub type ZoneId = String;

/// Immutable metadata describing a named sub-region of the board.
///
/// Zones partition the plane by configuration: one zone per logical
/// diagram, so collision searches scoped to a zone never disturb the
/// others. Zone/zone overlap is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDescriptor {
    pub id: ZoneId,
    pub bounds: WidgetBounds,
}

impl ZoneDescriptor {
    pub fn new(id: impl Into<ZoneId>, bounds: WidgetBounds) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

/// Lookup table for configured zones.
#[derive(Debug, Default)]
pub struct ZoneMap {
    zones: HashMap<ZoneId, ZoneDescriptor>,
}

impl ZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, descriptor: ZoneDescriptor) {
        self.zones.insert(descriptor.id.clone(), descriptor);
    }

    pub fn get(&self, id: &str) -> Result<&ZoneDescriptor> {
        self.zones
            .get(id)
            .ok_or_else(|| LayoutError::ZoneNotFound(id.to_string()))
    }

    /// First zone whose bounds contain the point, if any.
    pub fn zone_at(&self, point: Point) -> Option<&ZoneDescriptor> {
        self.zones.values().find(|zone| zone.contains(point))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
