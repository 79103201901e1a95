//! Shared type definitions for the duck race backend.
//!
//! These are the records the HTTP API serializes. They flow to the
//! browser client as `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Integer newtype for duck identifiers
//! - [`structs`] -- Duck and race settings records

pub mod ids;
pub mod structs;

pub use ids::DuckId;
pub use structs::{Duck, RaceSettings};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::DuckId::export_all();
        let _ = crate::structs::Duck::export_all();
        let _ = crate::structs::RaceSettings::export_all();
    }
}
