//! Presentation helpers consumed by the board client, not by the engine.
//!
//! The remote sticky-note API cannot set note colors, so categories are
//! simulated by prefixing the text with an emoji marker. Size presets give
//! documents a consistent visual hierarchy. Both are plain lookup tables;
//! the placement engine never sees them.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Semantic category rendered as an emoji prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualCategory {
    Start,
    Process,
    Complete,
    Warning,
    Error,
    Info,
    Idea,
    Goal,
    Priority,
    Question,
    Decision,
}

impl VisualCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "\u{1f7e2}",
            Self::Process => "\u{26a1}",
            Self::Complete => "\u{2705}",
            Self::Warning => "\u{26a0}\u{fe0f}",
            Self::Error => "\u{274c}",
            Self::Info => "\u{1f535}",
            Self::Idea => "\u{1f4a1}",
            Self::Goal => "\u{1f3af}",
            Self::Priority => "\u{2b50}",
            Self::Question => "\u{2753}",
            Self::Decision => "\u{1f500}",
        }
    }

    /// Prefix `text` with the category marker.
    pub fn tag(&self, text: &str) -> String {
        format!("{} {}", self.label(), text)
    }
}

/// Preset widget sizes for visual hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSize {
    Hero,
    Section,
    Standard,
    Compact,
    Annotation,
    Wide,
}

impl NoteSize {
    pub fn size(&self) -> Size {
        match self {
            Self::Hero => Size::new(300.0, 120.0),
            Self::Section => Size::new(250.0, 100.0),
            Self::Standard => Size::new(200.0, 150.0),
            Self::Compact => Size::new(150.0, 100.0),
            Self::Annotation => Size::new(120.0, 80.0),
            Self::Wide => Size::new(350.0, 80.0),
        }
    }
}
