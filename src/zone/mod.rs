//! Zone module orchestrator following the RSB module specification.

mod core;

pub use core::{ZoneDescriptor, ZoneId, ZoneMap};
