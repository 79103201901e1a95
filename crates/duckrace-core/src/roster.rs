//! The roster store: ducks plus race settings.
//!
//! [`RosterStore`] is plain synchronous state. It keeps these invariants
//! across every operation:
//!
//! - the roster holds between 1 and [`MAX_DUCKS`] ducks
//! - lanes are exactly `0..len` in roster order
//! - ids are unique and never reused for the lifetime of the store
//! - the predetermined winner, when set, names a duck on the roster
//! - the race duration stays within `1..=60`
//!
//! Callers sharing the store between tasks must hold an exclusive lock
//! across each mutating call.

use std::collections::BTreeSet;

use duckrace_types::{Duck, DuckId, RaceSettings};
use tracing::debug;

use crate::error::RosterError;
use crate::ids::{IdSource, RandomIdSource};
use crate::patch::DuckPatch;
use crate::record::DuckRecord;
use crate::settings::{DEFAULT_RACE_DURATION, WinnerSelection, clamp_duration};

/// Maximum number of ducks on the roster.
pub const MAX_DUCKS: usize = 100;

/// Candidates drawn before giving up on a fresh id.
const MAX_ID_ATTEMPTS: u32 = 1024;

/// Hue step between consecutive generated duck colors, in degrees.
const HUE_STEP: usize = 25;

/// The four ducks every new store starts with.
pub fn seed_ducks() -> Vec<Duck> {
    vec![
        Duck::new(DuckId(1001), "Vịt Vàng", "#FFD700", 0),
        Duck::new(DuckId(1002), "Vịt Xanh", "#4CAF50", 1),
        Duck::new(DuckId(1003), "Vịt Nước", "#3498DB", 2),
        Duck::new(DuckId(1004), "Vịt Đỏ", "#FF6B6B", 3),
    ]
}

/// In-memory roster and race settings.
#[derive(Debug)]
pub struct RosterStore {
    ducks: Vec<DuckRecord>,
    /// Every id ever handed out, including removed ducks.
    issued: BTreeSet<DuckId>,
    race_duration: u32,
    predetermined_winner_id: Option<DuckId>,
    ids: Box<dyn IdSource>,
}

impl RosterStore {
    /// Create a store with the seed roster and default settings.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(RandomIdSource::new()))
    }

    /// Create a seeded store that draws new ids from `ids`.
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        let ducks: Vec<DuckRecord> = seed_ducks().into_iter().map(DuckRecord::new).collect();
        let issued = ducks.iter().map(|r| r.duck.id).collect();
        Self {
            ducks,
            issued,
            race_duration: DEFAULT_RACE_DURATION,
            predetermined_winner_id: None,
            ids,
        }
    }

    // -----------------------------------------------------------------------
    // Ducks
    // -----------------------------------------------------------------------

    /// The roster in lane order.
    pub fn ducks(&self) -> &[DuckRecord] {
        &self.ducks
    }

    /// Number of ducks on the roster.
    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    /// Always `false`: the last duck cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }

    /// Look up a duck by id.
    pub fn get(&self, id: DuckId) -> Option<&DuckRecord> {
        self.ducks.iter().find(|r| r.duck.id == id)
    }

    /// Append a generated duck in the next lane.
    ///
    /// # Errors
    ///
    /// [`RosterError::CapacityExceeded`] when the roster is full, or
    /// [`RosterError::IdGeneration`] if no fresh id could be drawn.
    pub fn add_duck(&mut self) -> Result<DuckRecord, RosterError> {
        let count = self.ducks.len();
        if count >= MAX_DUCKS {
            return Err(RosterError::CapacityExceeded { max: MAX_DUCKS });
        }

        let id = self.fresh_id()?;
        let lane = u32::try_from(count).unwrap_or(u32::MAX);
        let hue = count.saturating_mul(HUE_STEP) % 360;
        let duck = Duck::new(
            id,
            format!("Vịt {}", count.saturating_add(1)),
            format!("hsl({hue}, 70%, 60%)"),
            lane,
        );

        let record = DuckRecord::new(duck);
        self.ducks.push(record.clone());
        debug!(duck_id = %id, lane, "duck appended to roster");
        Ok(record)
    }

    /// Remove a duck and close the gap in the lanes.
    ///
    /// Clears the predetermined winner if it pointed at the removed duck.
    ///
    /// # Errors
    ///
    /// [`RosterError::LastDuckProtected`] if only one duck is left, or
    /// [`RosterError::NotFound`] if no duck has this id.
    pub fn remove_duck(&mut self, id: DuckId) -> Result<(), RosterError> {
        if self.ducks.len() <= 1 {
            return Err(RosterError::LastDuckProtected);
        }

        let index = self
            .ducks
            .iter()
            .position(|r| r.duck.id == id)
            .ok_or_else(|| RosterError::not_found(id))?;

        self.ducks.remove(index);
        self.renumber_lanes();

        if self.predetermined_winner_id == Some(id) {
            self.predetermined_winner_id = None;
            debug!(duck_id = %id, "predetermined winner cleared with its duck");
        }
        Ok(())
    }

    /// Merge `patch` into a duck's record.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] if no duck has this id, otherwise any
    /// error from [`DuckPatch::apply`].
    pub fn update_duck(&mut self, id: DuckId, patch: &DuckPatch) -> Result<(), RosterError> {
        let record = self
            .ducks
            .iter_mut()
            .find(|r| r.duck.id == id)
            .ok_or_else(|| RosterError::not_found(id))?;
        patch.apply(record)
    }

    fn renumber_lanes(&mut self) {
        for (index, record) in self.ducks.iter_mut().enumerate() {
            record.duck.lane = u32::try_from(index).unwrap_or(u32::MAX);
        }
    }

    fn fresh_id(&mut self) -> Result<DuckId, RosterError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = DuckId(self.ids.next_candidate());
            if self.issued.insert(candidate) {
                return Ok(candidate);
            }
        }
        Err(RosterError::IdGeneration {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Current race settings.
    pub const fn settings(&self) -> RaceSettings {
        RaceSettings {
            race_duration: self.race_duration,
            predetermined_winner_id: self.predetermined_winner_id,
        }
    }

    /// Store `requested` clamped into `1..=60` and return the stored value.
    pub fn update_race_duration(&mut self, requested: i64) -> u32 {
        self.race_duration = clamp_duration(requested);
        self.race_duration
    }

    /// Set or clear the predetermined winner.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] if the selected duck is not on the
    /// roster. The previous winner is kept.
    pub fn set_predetermined_winner(&mut self, selection: WinnerSelection) -> Result<(), RosterError> {
        match selection {
            WinnerSelection::Clear => {
                self.predetermined_winner_id = None;
                Ok(())
            }
            WinnerSelection::Duck(id) => {
                if self.get(id).is_none() {
                    return Err(RosterError::not_found(id));
                }
                self.predetermined_winner_id = Some(id);
                Ok(())
            }
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
