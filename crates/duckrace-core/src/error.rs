//! Errors returned by the roster store.
//!
//! Every variant is a recoverable refusal: the store is left exactly as
//! it was before the call. The API layer maps each one to a 4xx response.

use duckrace_types::DuckId;

/// Reasons a roster or settings operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The roster already holds the maximum number of ducks.
    #[error("cannot add duck: roster is full ({max} ducks)")]
    CapacityExceeded {
        /// The roster ceiling.
        max: usize,
    },

    /// Removing the duck would leave the roster empty.
    #[error("cannot remove the last duck")]
    LastDuckProtected,

    /// No duck matches the given identifier.
    #[error("duck not found: {0}")]
    NotFound(String),

    /// The patch tried to overwrite a store-owned field.
    #[error("field `{field}` cannot be changed")]
    ImmutableField {
        /// Name of the rejected field.
        field: String,
    },

    /// A known field was given a value of the wrong type.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidField {
        /// Name of the rejected field.
        field: String,
        /// What was expected.
        reason: String,
    },

    /// The id source kept producing ids that were already issued.
    #[error("failed to generate a unique duck id after {attempts} attempts")]
    IdGeneration {
        /// Number of candidates drawn.
        attempts: u32,
    },
}

impl RosterError {
    /// Build a [`RosterError::NotFound`] for a duck id.
    pub fn not_found(id: DuckId) -> Self {
        Self::NotFound(id.to_string())
    }

    /// Build a [`RosterError::InvalidField`].
    pub fn invalid_field(field: &str, reason: &str) -> Self {
        Self::InvalidField {
            field: field.to_owned(),
            reason: reason.to_owned(),
        }
    }
}
