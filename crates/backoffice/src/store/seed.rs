//! Built-in mock collections and loading of collection files.
//!
//! A collection document is a JSON object mapping entity names to arrays of
//! records. Each record must carry its `id`; every other key is validated
//! against the entity schema in create mode, so defaults are filled in and
//! undeclared keys are dropped exactly as they would be for a form.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use super::memory::InMemoryRepository;
use super::Repository;
use crate::entities::get_schema;
use crate::error::{BackofficeError, Result};
use crate::model::Record;
use crate::schema::{check_id, validate, EntitySchema, Mode, ValidationFailure};

/// The mock collections shipped with the crate.
pub const SEED_JSON: &str = include_str!("seed.json");

/// Parse and validate a collection document.
///
/// Entities come back sorted by name, records in array order.
pub fn parse_collections(json: &str) -> Result<Vec<(&'static EntitySchema, Vec<Record>)>> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(entities) = document else {
        return Err(BackofficeError::Malformed(
            "expected an object of entity collections".to_string(),
        ));
    };

    let mut collections = Vec::with_capacity(entities.len());
    for (name, rows) in entities {
        let schema = get_schema(&name)?;
        let Value::Array(rows) = rows else {
            return Err(BackofficeError::Malformed(format!(
                "{name} must be an array of records"
            )));
        };
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            records.push(parse_record(schema, index, row)?);
        }
        debug!(entity = schema.name, count = records.len(), "parsed collection");
        collections.push((schema, records));
    }
    Ok(collections)
}

fn parse_record(schema: &EntitySchema, index: usize, row: &Value) -> Result<Record> {
    let invalid = |source: ValidationFailure| BackofficeError::InvalidCollection {
        entity: schema.name.to_string(),
        index,
        source,
    };
    let Value::Object(payload) = row else {
        return Err(BackofficeError::Malformed(format!(
            "{} record #{index} must be an object",
            schema.name
        )));
    };

    let id_result = check_id(payload.get(EntitySchema::ID_FIELD));
    let fields_result = validate(payload, schema, Mode::Create);
    match (id_result, fields_result) {
        (Ok(id), Ok(validated)) => Ok(Record::from_payload(id, validated)),
        (Err(id_error), Ok(_)) => Err(invalid(ValidationFailure::from(id_error))),
        (Ok(_), Err(failure)) => Err(invalid(failure)),
        (Err(id_error), Err(failure)) => Err(invalid(failure.with_leading(id_error))),
    }
}

/// Build a repository from a collection document.
pub fn load_collections(json: &str) -> Result<InMemoryRepository> {
    let mut repo = InMemoryRepository::new();
    for (schema, records) in parse_collections(json)? {
        for record in records {
            repo.insert(schema.name, record)?;
        }
    }
    Ok(repo)
}

/// Build a repository from a collection file on disk.
pub fn load_file(path: &Path) -> Result<InMemoryRepository> {
    let json = std::fs::read_to_string(path)?;
    let repo = load_collections(&json)?;
    info!(path = %path.display(), "loaded collections");
    Ok(repo)
}

/// Repository pre-filled with the built-in mock collections.
pub fn seed_repository() -> Result<InMemoryRepository> {
    load_collections(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CATEGORY, SCHEMAS};
    use std::io::Write;

    #[test]
    fn builtin_seed_is_valid_for_every_entity() {
        let repo = seed_repository().unwrap();
        for schema in SCHEMAS {
            assert!(
                repo.count(schema.name) >= 2,
                "{} should have seed records",
                schema.name
            );
        }
    }

    #[test]
    fn seed_categories_match_dashboard_mock() {
        let repo = seed_repository().unwrap();
        let categories = repo.list(CATEGORY.name).unwrap();
        let statuses: Vec<_> = categories.iter().map(|r| r.text("status").unwrap()).collect();
        assert_eq!(statuses, vec!["ACTIVE", "ACTIVE", "ACTIVE", "INACTIVE"]);
        assert_eq!(categories[0].text("name"), Some("Technology"));
        assert_eq!(categories[0].text("description"), Some("Latest tech news"));
    }

    #[test]
    fn defaults_are_applied_to_seed_records() {
        let repo = load_collections(
            r#"{"faq": [{
                "id": "123e4567-e89b-12d3-a456-426614174000",
                "question": "Is this seeded?",
                "answer": "Yes, with defaults."
            }]}"#,
        )
        .unwrap();
        let faq = &repo.list("faq").unwrap()[0];
        assert_eq!(faq.text("status"), Some("ACTIVE"));
        assert_eq!(faq.get("order").and_then(|v| v.as_f64()), Some(0.0));
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = load_collections(r#"{"category": [{"name": "Tech", "slug": "tech"}]}"#)
            .unwrap_err();
        match err {
            BackofficeError::InvalidCollection { entity, index, source } => {
                assert_eq!(entity, "category");
                assert_eq!(index, 0);
                assert_eq!(source.messages(), vec!["ID is required"]);
            }
            other => panic!("Expected InvalidCollection, got {other:?}"),
        }
    }

    #[test]
    fn invalid_record_reports_all_errors() {
        let err = load_collections(
            r#"{"category": [{"id": "not-a-uuid", "name": "T", "slug": "Bad Slug"}]}"#,
        )
        .unwrap_err();
        let failure = err.validation().unwrap();
        assert_eq!(failure.fields(), vec!["id", "name", "slug"]);
    }

    #[test]
    fn unknown_entity_is_rejected() {
        assert!(matches!(
            load_collections(r#"{"widgets": []}"#),
            Err(BackofficeError::UnknownEntity(name)) if name == "widgets"
        ));
    }

    #[test]
    fn non_array_collection_is_malformed() {
        assert!(matches!(
            load_collections(r#"{"faq": {}}"#),
            Err(BackofficeError::Malformed(_))
        ));
        assert!(matches!(
            load_collections("[]"),
            Err(BackofficeError::Malformed(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let row = r#"{"id": "123e4567-e89b-12d3-a456-426614174000", "name": "Tech", "slug": "tech"}"#;
        let json = format!(r#"{{"category": [{row}, {row}]}}"#);
        assert!(matches!(
            load_collections(&json),
            Err(BackofficeError::DuplicateId { .. })
        ));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"user": [{{"id": "123e4567-e89b-12d3-a456-426614174000", "name": "Dana", "email": "dana@example.com"}}]}}"#
        )
        .unwrap();
        let repo = load_file(file.path()).unwrap();
        assert_eq!(repo.count("user"), 1);
        assert_eq!(repo.list("user").unwrap()[0].text("role"), Some("VIEWER"));
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_file(&dir.path().join("absent.json")),
            Err(BackofficeError::Io(_))
        ));
    }
}
