//! # Domain Model: Stored Records
//!
//! A [`Record`] is one validated row of an entity collection: an immutable
//! identifier plus the normalized field values produced by
//! [`crate::schema::validate`].
//!
//! ## Lifecycle
//!
//! - **Create**: a create-mode [`ValidatedPayload`] becomes a record through
//!   [`Record::new`] with a fresh identifier (defaults were applied by
//!   validation).
//! - **Update**: an update-mode payload is merged with [`Record::apply`]:
//!   set fields overwrite, cleared fields are removed, the identifier never
//!   changes.
//! - **Delete**: the record is removed from its collection. There is no
//!   soft-delete state; entities that need one model it as a status value.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::filter::Filterable;
use crate::schema::{EntitySchema, FieldValue, ValidatedPayload};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: Uuid,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: Uuid, fields: BTreeMap<String, FieldValue>) -> Self {
        Self { id, fields }
    }

    /// Build a record from a validated create payload.
    pub fn from_payload(id: Uuid, payload: ValidatedPayload) -> Self {
        Self::new(id, payload.fields)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Merge a validated update. The identifier is left untouched.
    pub fn apply(&mut self, update: &ValidatedPayload) {
        for (name, value) in &update.fields {
            self.fields.insert(name.clone(), value.clone());
        }
        for name in &update.cleared {
            self.fields.remove(name);
        }
    }

    /// Short label for messages: the first searchable field with a value.
    pub fn display_name(&self, schema: &EntitySchema) -> String {
        schema
            .list
            .searchable
            .iter()
            .find_map(|name| self.text(name))
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }
}

impl Filterable for Record {
    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)?.search_text()
    }

    fn facet_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(FieldValue::facet_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CATEGORY;
    use crate::schema::Mode;

    fn record(pairs: &[(&str, FieldValue)]) -> Record {
        Record::new(
            Uuid::new_v4(),
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn apply_merges_and_clears_but_keeps_id() {
        let mut rec = record(&[
            ("name", FieldValue::Text("Old".into())),
            ("description", FieldValue::Text("Desc".into())),
        ]);
        let id = rec.id();

        let mut update_fields = BTreeMap::new();
        update_fields.insert("name".to_string(), FieldValue::Text("New".into()));
        let update = ValidatedPayload {
            mode: Mode::Update,
            id: Some(Uuid::new_v4()),
            fields: update_fields,
            cleared: vec!["description".to_string()],
        };
        rec.apply(&update);

        assert_eq!(rec.id(), id);
        assert_eq!(rec.text("name"), Some("New"));
        assert!(rec.get("description").is_none());
    }

    #[test]
    fn serializes_flat_with_id() {
        let rec = Record::new(
            Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap(),
            [("name".to_string(), FieldValue::Text("Tech".into()))].into(),
        );
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "123e4567-e89b-12d3-a456-426614174000", "name": "Tech"})
        );
    }

    #[test]
    fn display_name_uses_first_searchable_field() {
        let rec = record(&[("name", FieldValue::Text("Technology".into()))]);
        assert_eq!(rec.display_name(&CATEGORY), "Technology");

        let anonymous = record(&[]);
        assert_eq!(anonymous.display_name(&CATEGORY), anonymous.id().to_string());
    }

    #[test]
    fn filterable_exposes_text_and_facets() {
        let rec = record(&[
            ("name", FieldValue::Text("Technology".into())),
            ("order", FieldValue::Integer(2)),
        ]);
        assert_eq!(rec.text_field("name").as_deref(), Some("Technology"));
        assert!(rec.text_field("order").is_none());
        assert_eq!(rec.facet_value("order").as_deref(), Some("2"));
        assert!(rec.facet_value("status").is_none());
    }
}
