//! Type-safe identifier for ducks.
//!
//! Duck ids are plain 32-bit integers on the wire so the browser client
//! can keep treating them as numbers. The seeded roster uses 1001-1004;
//! ids for added ducks are drawn at random by the roster store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a duck in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DuckId(pub u32);

impl core::fmt::Display for DuckId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
