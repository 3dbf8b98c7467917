//! Transport request record and entry draft

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use freta_types::{Error, Result};

use super::schema::{FieldId, FIELDS};

/// Generate a fresh record identifier.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// One registered transport request.
///
/// An immutable identifier plus one string value per schema field. Values
/// are opaque at this layer; date/number semantics apply only at the entry
/// and export boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    id: String,
    values: BTreeMap<FieldId, String>,
}

impl TransportRequest {
    /// Build a record from a validated draft under a fresh identifier.
    pub fn from_draft(id: String, draft: RequestDraft) -> Self {
        Self {
            id,
            values: draft.values,
        }
    }

    /// Copy of this record's fields under a new identifier.
    pub fn duplicate_as(&self, id: String) -> Self {
        Self {
            id,
            values: self.values.clone(),
        }
    }

    /// Replace every field from the draft. The identifier is untouched.
    pub fn replace_fields(&mut self, draft: RequestDraft) {
        self.values = draft.values;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value of a field, empty when absent.
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// `(field, value)` pairs in schema order, absent fields as empty.
    pub fn row(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::all().map(|field| (field, self.value(field)))
    }
}

// Persisted shape: a flat object with `id` plus `col_N` string keys, the
// storage contract shared with the original spreadsheet-backed records.
#[derive(Serialize, Deserialize)]
struct FlatRecord {
    id: String,
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Serialize for TransportRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let flat = FlatRecord {
            id: self.id.clone(),
            values: self
                .values
                .iter()
                .map(|(field, value)| (field.to_string(), value.clone()))
                .collect(),
        };
        flat.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TransportRequest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let flat = FlatRecord::deserialize(deserializer)?;
        // Keys outside the schema are tolerated on load: schema evolution is
        // implicit, missing fields read back as empty.
        let values = flat
            .values
            .into_iter()
            .filter_map(|(key, value)| FieldId::parse(&key).map(|field| (field, value)))
            .collect();
        Ok(Self { id: flat.id, values })
    }
}

/// Transient entry draft: a partial field mapping, normalized at the entry
/// boundary (trimmed, upper-cased) the way the original form stores input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    values: BTreeMap<FieldId, String>,
}

impl RequestDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) -> &mut Self {
        self.values.insert(field, normalize(&value.into()));
        self
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Build a draft from a JSON object of `col_N` keys to string values.
    ///
    /// An `id` key is stripped (identifiers are assigned by the store and
    /// never travel in drafts); any other unknown key is rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Validation("draft must be a JSON object".into()))?;

        let mut draft = RequestDraft::new();
        for (key, raw) in object {
            if key == "id" {
                continue;
            }
            let field = FieldId::parse(key)
                .ok_or_else(|| Error::Validation(format!("unknown field: {}", key)))?;
            let text = raw
                .as_str()
                .ok_or_else(|| Error::Validation(format!("field {} must be a string", key)))?;
            draft.set(field, text);
        }
        Ok(draft)
    }

    /// Check that every required schema field has a non-empty value.
    pub fn validate_required(&self) -> Result<()> {
        let missing: Vec<&str> = FIELDS
            .iter()
            .filter(|definition| definition.required)
            .filter(|definition| {
                self.get(definition.id).map(str::is_empty).unwrap_or(true)
            })
            .map(|definition| definition.label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}
