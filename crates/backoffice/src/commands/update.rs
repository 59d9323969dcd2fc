use tracing::debug;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BackofficeError, Result};
use crate::schema::{validate, EntitySchema, Mode, Payload, ValidationFailure};
use crate::store::Repository;

/// Apply a partial payload to an existing record.
///
/// The payload must carry the record `id` and at least one declared field.
/// Cross-field rules are re-checked on the merged record, so changing only
/// `end_date` still has to respect the stored `start_date`.
pub fn run<R: Repository>(repo: &mut R, schema: &EntitySchema, payload: &Payload) -> Result<CmdResult> {
    let validated = validate(payload, schema, Mode::Update)?;
    let Some(id) = validated.id else {
        return Err(BackofficeError::Malformed(
            "update payload validated without an id".to_string(),
        ));
    };

    let mut record = repo.get(schema.name, &id)?;
    record.apply(&validated);

    let touched: Vec<&str> = validated.touched().collect();
    let errors = schema
        .refinements
        .iter()
        .filter(|rule| rule.fields().iter().any(|f| touched.contains(f)))
        .filter_map(|rule| rule.check(record.fields()))
        .collect();
    if let Some(failure) = ValidationFailure::from_errors(errors) {
        debug!(entity = schema.name, %id, "merged record violates refinements");
        return Err(failure.into());
    }

    repo.replace(schema.name, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} updated: {}",
        schema.label(),
        record.display_name(schema)
    )));
    Ok(result.with_affected(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::entities::{CATEGORY, FAQ, PROJECT};
    use crate::model::Record;
    use crate::store::memory::InMemoryRepository;
    use serde_json::json;
    use uuid::Uuid;

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    fn seeded_category(repo: &mut InMemoryRepository) -> Record {
        create::run(
            repo,
            &CATEGORY,
            &payload(json!({"name": "Tech", "slug": "tech", "description": "Gadgets"})),
        )
        .unwrap()
        .affected
        .remove(0)
    }

    #[test]
    fn merges_changed_fields_and_keeps_the_rest() {
        let mut repo = InMemoryRepository::new();
        let original = seeded_category(&mut repo);

        let result = run(
            &mut repo,
            &CATEGORY,
            &payload(json!({"id": original.id().to_string(), "status": "INACTIVE"})),
        )
        .unwrap();

        let stored = repo.get("category", &original.id()).unwrap();
        assert_eq!(stored.text("status"), Some("INACTIVE"));
        assert_eq!(stored.text("name"), Some("Tech"));
        assert_eq!(result.affected, vec![stored]);
        assert_eq!(result.messages[0].content, "Category updated: Tech");
    }

    #[test]
    fn blank_optional_field_is_cleared() {
        let mut repo = InMemoryRepository::new();
        let original = seeded_category(&mut repo);

        run(
            &mut repo,
            &CATEGORY,
            &payload(json!({"id": original.id().to_string(), "description": "  "})),
        )
        .unwrap();

        let stored = repo.get("category", &original.id()).unwrap();
        assert!(stored.get("description").is_none());
    }

    #[test]
    fn id_only_payload_is_no_change() {
        let mut repo = InMemoryRepository::new();
        let err = run(
            &mut repo,
            &FAQ,
            &payload(json!({"id": "123e4567-e89b-12d3-a456-426614174000"})),
        )
        .unwrap_err();
        assert!(err.validation().unwrap().is_no_change());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut repo = InMemoryRepository::new();
        let id = Uuid::new_v4();
        match run(
            &mut repo,
            &CATEGORY,
            &payload(json!({"id": id.to_string(), "name": "Renamed"})),
        ) {
            Err(BackofficeError::RecordNotFound { entity, id: missing }) => {
                assert_eq!(entity, "category");
                assert_eq!(missing, id);
            }
            other => panic!("Expected RecordNotFound, got {other:?}"),
        }
    }

    #[test]
    fn refinement_checked_against_stored_values() {
        let mut repo = InMemoryRepository::new();
        let project = create::run(
            &mut repo,
            &PROJECT,
            &payload(json!({
                "name": "Website",
                "client_id": "5f0c9a52-6f43-4b8e-9a57-0d3c8b1f2a10",
                "start_date": "2024-05-01"
            })),
        )
        .unwrap()
        .affected
        .remove(0);

        let err = run(
            &mut repo,
            &PROJECT,
            &payload(json!({"id": project.id().to_string(), "end_date": "2024-04-01"})),
        )
        .unwrap_err();
        assert_eq!(err.validation().unwrap().fields(), vec!["end_date"]);

        let stored = repo.get("project", &project.id()).unwrap();
        assert!(stored.get("end_date").is_none());

        run(
            &mut repo,
            &PROJECT,
            &payload(json!({"id": project.id().to_string(), "end_date": "2024-06-01"})),
        )
        .unwrap();
    }
}
