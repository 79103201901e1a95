//! Roster API server for the duck race game.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Roster endpoints** (`/api/ducks`) to list, add, remove, and
//!   update ducks
//! - **Settings endpoints** (`/api/settings`) for race duration and the
//!   predetermined winner
//! - **Minimal HTML status page** (`GET /`)
//! - **Static assets** (`/static/*`) when a directory is configured
//!
//! # Architecture
//!
//! All state lives in one [`RosterStore`] behind a single
//! [`tokio::sync::RwLock`] in [`AppState`]. Mutating handlers hold the
//! write guard for the full operation, so concurrent requests observe
//! each store operation as atomic.
//!
//! [`RosterStore`]: duckrace_core::RosterStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::{build_router, build_router_with_static};
pub use server::{ServerError, start_server};
pub use state::AppState;
