//! Race settings input handling.
//!
//! Clients send settings as loosely-typed JSON: the duration may be any
//! number and the winner may be `null`, `"none"`, an integer, or an
//! integer inside a string. These helpers turn that into values the
//! store accepts.

use duckrace_types::DuckId;
use serde_json::Value;

use crate::error::RosterError;

/// Shortest allowed race, in seconds.
pub const MIN_RACE_DURATION: u32 = 1;

/// Longest allowed race, in seconds.
pub const MAX_RACE_DURATION: u32 = 60;

/// Race duration at startup, in seconds.
pub const DEFAULT_RACE_DURATION: u32 = 10;

/// Sentinel string that clears the predetermined winner.
pub const NO_WINNER: &str = "none";

/// Clamp a requested duration into `MIN_RACE_DURATION..=MAX_RACE_DURATION`.
pub fn clamp_duration(requested: i64) -> u32 {
    let clamped = requested.clamp(i64::from(MIN_RACE_DURATION), i64::from(MAX_RACE_DURATION));
    u32::try_from(clamped).unwrap_or(MAX_RACE_DURATION)
}

/// Read a race duration from JSON.
///
/// Integers pass through unchanged. Fractional values are clamped and
/// then truncated toward zero.
///
/// # Errors
///
/// [`RosterError::InvalidField`] if the value is not a number.
pub fn duration_from_json(value: &Value) -> Result<i64, RosterError> {
    if let Some(whole) = value.as_i64() {
        return Ok(whole);
    }
    let Some(fractional) = value.as_f64() else {
        return Err(RosterError::invalid_field("raceDuration", "expected a number"));
    };
    let clamped = fractional.clamp(f64::from(MIN_RACE_DURATION), f64::from(MAX_RACE_DURATION));
    #[allow(clippy::cast_possible_truncation)]
    let truncated = clamped.trunc() as i64;
    Ok(truncated)
}

/// Requested change to the predetermined winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerSelection {
    /// Let the race decide.
    Clear,
    /// Force this duck to win.
    Duck(DuckId),
}

impl WinnerSelection {
    /// Interpret a JSON winner value.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] if the value cannot name any duck.
    pub fn from_json(value: &Value) -> Result<Self, RosterError> {
        match value {
            Value::Null => Ok(Self::Clear),
            Value::String(s) if s == NO_WINNER => Ok(Self::Clear),
            Value::String(s) => s
                .trim()
                .parse::<u32>()
                .ok()
                .map(|id| Self::Duck(DuckId(id)))
                .ok_or_else(|| RosterError::NotFound(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .map(|id| Self::Duck(DuckId(id)))
                .ok_or_else(|| RosterError::NotFound(n.to_string())),
            other => Err(RosterError::NotFound(other.to_string())),
        }
    }
}
