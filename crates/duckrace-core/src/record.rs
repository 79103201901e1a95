//! Stored duck records.

use std::collections::BTreeMap;

use duckrace_types::Duck;
use serde::Serialize;
use serde_json::Value;

/// A duck as held by the store.
///
/// Clients may attach arbitrary extra fields through a patch. Those are
/// kept in `extra` and serialized flat next to the typed fields, so a
/// client reading the roster back sees exactly what it wrote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuckRecord {
    /// The typed duck fields.
    #[serde(flatten)]
    pub duck: Duck,
    /// Client-supplied fields outside the typed shape.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DuckRecord {
    /// Wrap a duck with no extra fields.
    pub const fn new(duck: Duck) -> Self {
        Self {
            duck,
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use duckrace_types::DuckId;

    use super::*;

    #[test]
    fn extra_fields_serialize_flat() {
        let mut record = DuckRecord::new(Duck::new(DuckId(1), "A", "#fff", 0));
        record
            .extra
            .insert(String::from("speed"), Value::from(3));
        let json = serde_json::to_value(&record).unwrap_or_default();
        assert_eq!(json["speed"], 3);
        assert_eq!(json["name"], "A");
        assert!(json.get("extra").is_none());
        assert!(json.get("duck").is_none());
    }
}
