//! Partial updates to a duck record.
//!
//! A patch is a JSON object of field names to values. `id` and `lane`
//! belong to the store and are refused. The typed fields are
//! type-checked. Every other name is stored verbatim as an extra field.
//! The whole patch is checked before anything is written, so a rejected
//! patch leaves the record untouched.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RosterError;
use crate::record::DuckRecord;

/// Field names the store owns.
const IMMUTABLE_FIELDS: [&str; 2] = ["id", "lane"];

/// A partial update for a single duck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DuckPatch(Map<String, Value>);

/// One checked field of a patch, ready to apply.
enum PatchField<'a> {
    Name(&'a str),
    Color(&'a str),
    Position(f64),
    IsWinner(bool),
    Extra(&'a str, &'a Value),
}

impl DuckPatch {
    /// Wrap a JSON object.
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Whether the patch names no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in the patch.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Check every field, then write them all into `record`.
    ///
    /// # Errors
    ///
    /// [`RosterError::ImmutableField`] for `id`/`lane`, or
    /// [`RosterError::InvalidField`] for a typed field with the wrong
    /// JSON type. On error nothing is written.
    pub fn apply(&self, record: &mut DuckRecord) -> Result<(), RosterError> {
        for field in self.checked_fields()? {
            match field {
                PatchField::Name(name) => name.clone_into(&mut record.duck.name),
                PatchField::Color(color) => color.clone_into(&mut record.duck.color),
                PatchField::Position(position) => record.duck.position = position,
                PatchField::IsWinner(is_winner) => record.duck.is_winner = is_winner,
                PatchField::Extra(key, value) => {
                    record.extra.insert(key.to_owned(), value.clone());
                }
            }
        }
        Ok(())
    }

    fn checked_fields(&self) -> Result<Vec<PatchField<'_>>, RosterError> {
        self.0
            .iter()
            .map(|(key, value)| check_field(key, value))
            .collect()
    }
}

fn check_field<'a>(key: &'a str, value: &'a Value) -> Result<PatchField<'a>, RosterError> {
    if IMMUTABLE_FIELDS.contains(&key) {
        return Err(RosterError::ImmutableField {
            field: key.to_owned(),
        });
    }

    match key {
        "name" => value
            .as_str()
            .map(PatchField::Name)
            .ok_or_else(|| RosterError::invalid_field(key, "expected a string")),
        "color" => value
            .as_str()
            .map(PatchField::Color)
            .ok_or_else(|| RosterError::invalid_field(key, "expected a string")),
        "position" => value
            .as_f64()
            .map(PatchField::Position)
            .ok_or_else(|| RosterError::invalid_field(key, "expected a number")),
        "isWinner" => value
            .as_bool()
            .map(PatchField::IsWinner)
            .ok_or_else(|| RosterError::invalid_field(key, "expected a boolean")),
        _ => Ok(PatchField::Extra(key, value)),
    }
}
