use std::collections::{HashMap, HashSet};

use blake3::Hash;

use crate::error::{LayoutError, Result};
use crate::geometry::WidgetBounds;
use crate::zone::ZoneId;

pub type WidgetId = String;

/// Text payload carried for each widget. Opaque to the placement engine;
/// the caller owns sanitization and transmission.
pub type WidgetContent = String;

/// Committed state for a single placed widget.
#[derive(Debug, Clone)]
pub struct WidgetState {
    pub bounds: WidgetBounds,
    pub zone: Option<ZoneId>,
    pub content: WidgetContent,
    hash: Option<Hash>,
    pub is_dirty: bool,
}

impl WidgetState {
    fn new(bounds: WidgetBounds, zone: Option<ZoneId>) -> Self {
        Self {
            bounds,
            zone,
            content: WidgetContent::new(),
            hash: None,
            is_dirty: true,
        }
    }

    fn update_content(&mut self, content: WidgetContent) {
        let new_hash = blake3::hash(content.as_bytes());
        if self.hash.map(|h| h != new_hash).unwrap_or(true) {
            self.content = content;
            self.hash = Some(new_hash);
            self.is_dirty = true;
        }
    }
}

/// Registry of committed widget placements.
///
/// Bounds are immutable once committed; the remote board cannot reposition
/// a widget after creation. The no-overlap invariant is maintained by the
/// placement engine, which consults [`WidgetRegistry::bounds_in_scope`]
/// before every insert.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    entries: HashMap<WidgetId, WidgetState>,
    dirty: HashSet<WidgetId>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a placement decision. The engine calls this only after the
    /// collision test passed; callers inserting directly take on the
    /// no-overlap invariant themselves.
    pub fn insert(&mut self, id: WidgetId, bounds: WidgetBounds, zone: Option<ZoneId>) {
        self.entries.insert(id.clone(), WidgetState::new(bounds, zone));
        self.dirty.insert(id);
    }

    /// Drop a widget, returning its bounds. A missing id is a routine
    /// no-op so callers may remove twice without an error path.
    pub fn remove(&mut self, id: &str) -> Option<WidgetBounds> {
        self.dirty.remove(id);
        self.entries.remove(id).map(|state| state.bounds)
    }

    /// Clear the whole board, all zones included.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty.clear();
    }

    /// Committed bounds visible to a collision test. With a zone given,
    /// only widgets tagged with that zone participate; unrelated diagrams
    /// never interfere.
    pub fn bounds_in_scope<'a>(
        &'a self,
        zone: Option<&'a ZoneId>,
    ) -> impl Iterator<Item = &'a WidgetBounds> {
        self.entries
            .values()
            .filter(move |state| match zone {
                Some(zone) => state.zone.as_ref() == Some(zone),
                None => true,
            })
            .map(|state| &state.bounds)
    }

    pub fn apply_content(&mut self, id: &str, content: WidgetContent) -> Result<()> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| LayoutError::UnknownWidget(id.to_string()))?;
        entry.update_content(content);
        if entry.is_dirty {
            self.dirty.insert(id.to_string());
        }
        Ok(())
    }

    /// Drain widgets whose placement or content changed since the last
    /// drain. The caller uses this batch to sync the remote board.
    pub fn take_dirty(&mut self) -> Vec<(WidgetId, WidgetState)> {
        let ids: Vec<_> = self.dirty.drain().collect();
        ids.into_iter()
            .filter_map(|id| {
                self.entries.get_mut(&id).map(|state| {
                    state.is_dirty = false;
                    (id.clone(), state.clone())
                })
            })
            .collect()
    }

    pub fn bounds_of(&self, id: &str) -> Option<WidgetBounds> {
        self.entries.get(id).map(|state| state.bounds)
    }

    pub fn zone_of(&self, id: &str) -> Option<&ZoneId> {
        self.entries.get(id).and_then(|state| state.zone.as_ref())
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WidgetBounds {
        WidgetBounds::new(0.0, 0.0, 200.0, 150.0)
    }

    #[test]
    fn insert_flags_widget_as_dirty() {
        let mut registry = WidgetRegistry::new();
        registry.insert("note".to_string(), bounds(), None);

        let dirty = registry.take_dirty();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].0, "note");
        assert!(!registry.has_dirty());
    }

    #[test]
    fn apply_content_detects_changes() {
        let mut registry = WidgetRegistry::new();
        registry.insert("note".to_string(), bounds(), None);
        registry.take_dirty();

        registry
            .apply_content("note", "hello".to_string())
            .unwrap();
        assert_eq!(registry.take_dirty().len(), 1);

        registry
            .apply_content("note", "hello".to_string())
            .unwrap();
        assert!(registry.take_dirty().is_empty());
    }

    #[test]
    fn apply_content_unknown_widget() {
        let mut registry = WidgetRegistry::new();
        let err = registry
            .apply_content("ghost", "boo".to_string())
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnknownWidget(id) if id == "ghost"));
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut registry = WidgetRegistry::new();
        registry.insert("note".to_string(), bounds(), None);

        assert!(registry.remove("note").is_some());
        assert!(registry.remove("note").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn scope_filters_by_zone() {
        let mut registry = WidgetRegistry::new();
        registry.insert(
            "a".to_string(),
            bounds(),
            Some("flow".to_string()),
        );
        registry.insert(
            "b".to_string(),
            WidgetBounds::new(500.0, 0.0, 100.0, 100.0),
            Some("kanban".to_string()),
        );
        registry.insert(
            "c".to_string(),
            WidgetBounds::new(900.0, 0.0, 100.0, 100.0),
            None,
        );

        let flow = "flow".to_string();
        assert_eq!(registry.bounds_in_scope(Some(&flow)).count(), 1);
        assert_eq!(registry.bounds_in_scope(None).count(), 3);
    }

    #[test]
    fn clear_empties_every_zone() {
        let mut registry = WidgetRegistry::new();
        registry.insert("a".to_string(), bounds(), Some("flow".to_string()));
        registry.insert("b".to_string(), bounds(), None);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.has_dirty());
    }
}
