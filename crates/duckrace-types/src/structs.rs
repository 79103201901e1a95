//! Duck and race settings records as exchanged with the client.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::DuckId;

// ---------------------------------------------------------------------------
// Duck
// ---------------------------------------------------------------------------

/// A single racer on the roster.
///
/// `lane` is the duck's dense index in the roster and is owned by the
/// store: it is reassigned whenever the roster shrinks. `position` and
/// `is_winner` are written by the client during a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Duck {
    /// Unique identifier, never reused.
    pub id: DuckId,
    /// Display name.
    pub name: String,
    /// CSS color string (hex or `hsl(...)`).
    pub color: String,
    /// Race progress.
    #[serde(default)]
    pub position: f64,
    /// Track lane, `0..count` in roster order.
    pub lane: u32,
    /// Whether this duck won the last race.
    #[serde(default)]
    pub is_winner: bool,
}

impl Duck {
    /// Create a duck at the starting line with no win recorded.
    pub fn new(id: DuckId, name: impl Into<String>, color: impl Into<String>, lane: u32) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            position: 0.0,
            lane,
            is_winner: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Race settings
// ---------------------------------------------------------------------------

/// Race configuration shared by every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct RaceSettings {
    /// Race length in seconds, always within `1..=60`.
    pub race_duration: u32,
    /// Duck forced to win the next race, if any.
    pub predetermined_winner_id: Option<DuckId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duck_uses_camel_case_keys() {
        let duck = Duck::new(DuckId(1001), "Vịt Vàng", "#FFD700", 0);
        let json = serde_json::to_value(&duck).unwrap_or_default();
        assert_eq!(json["isWinner"], false);
        assert_eq!(json["lane"], 0);
        assert_eq!(json["id"], 1001);
        assert!(json.get("is_winner").is_none());
    }

    #[test]
    fn settings_serialize_missing_winner_as_null() {
        let settings = RaceSettings {
            race_duration: 10,
            predetermined_winner_id: None,
        };
        let json = serde_json::to_value(settings).unwrap_or_default();
        assert_eq!(json["raceDuration"], 10);
        assert!(json["predeterminedWinnerId"].is_null());
    }

    #[test]
    fn duck_defaults_position_and_winner_flag() {
        let raw = r##"{"id":5,"name":"A","color":"#000","lane":2}"##;
        let duck: Result<Duck, _> = serde_json::from_str(raw);
        assert!(duck.is_ok());
        let duck = duck.unwrap_or_else(|_| Duck::new(DuckId(0), "", "", 0));
        assert!(!duck.is_winner);
        assert!(duck.position.abs() < f64::EPSILON);
    }
}
