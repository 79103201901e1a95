//! Roster store for the duck race backend.
//!
//! The store is a small piece of synchronous in-memory state: an ordered
//! roster of ducks plus the race settings. It owns the invariants the
//! client relies on (dense lanes, unique ids, a non-empty roster of at
//! most 100 ducks, a winner that always exists, a clamped duration).
//!
//! # Modules
//!
//! - [`roster`] -- [`RosterStore`] and its operations
//! - [`record`] -- Stored duck record with client-supplied extra fields
//! - [`patch`] -- Partial updates to a duck
//! - [`settings`] -- Duration clamping and winner selection parsing
//! - [`ids`] -- Candidate id sources
//! - [`error`] -- [`RosterError`]
//! - [`config`] -- Typed YAML configuration

pub mod config;
pub mod error;
pub mod ids;
pub mod patch;
pub mod record;
pub mod roster;
pub mod settings;

pub use config::{AppConfig, ConfigError, LogFormat, LoggingConfig, ServerConfig};
pub use error::RosterError;
pub use ids::{IdSource, RandomIdSource};
pub use patch::DuckPatch;
pub use record::DuckRecord;
pub use roster::{MAX_DUCKS, RosterStore};
pub use settings::WinnerSelection;
