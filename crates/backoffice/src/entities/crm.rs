//! Client work: clients, projects, tasks, support tickets.

use super::PRIORITIES;
use crate::schema::{EntitySchema, FieldSpec, ListSpec, Refinement};

const PRIORITY: FieldSpec = FieldSpec::enumeration("priority", PRIORITIES).default_text("MEDIUM");

const CLIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name").required().length(2, 100),
    FieldSpec::email("email").required().max_length(254),
    FieldSpec::text("phone").length(7, 20),
    FieldSpec::text("company").max_length(100),
    FieldSpec::text("address").max_length(500),
    FieldSpec::url("website"),
    FieldSpec::status(&["ACTIVE", "INACTIVE", "LEAD"], "ACTIVE"),
];

pub const CLIENT: EntitySchema = EntitySchema::new("client", "clients", CLIENT_FIELDS)
    .list(ListSpec::new(&["name", "email", "company"], &["status"]));

const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name").required().length(2, 100),
    FieldSpec::text("description").max_length(2000),
    FieldSpec::uuid_ref("client_id").required(),
    FieldSpec::date("start_date").required(),
    FieldSpec::date("end_date"),
    FieldSpec::number("budget").at_least(0.0),
    FieldSpec::integer("progress").range(0.0, 100.0).default_int(0),
    PRIORITY,
    FieldSpec::status(
        &["PLANNING", "IN_PROGRESS", "ON_HOLD", "COMPLETED", "CANCELLED"],
        "PLANNING",
    ),
];

pub const PROJECT: EntitySchema = EntitySchema::new("project", "projects", PROJECT_FIELDS)
    .refine(&[Refinement::DateOrder {
        start: "start_date",
        end: "end_date",
    }])
    .list(ListSpec::new(&["name", "description"], &["status", "priority"]));

const TASK_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title").required().length(2, 200),
    FieldSpec::text("description").max_length(2000),
    FieldSpec::uuid_ref("project_id").required(),
    FieldSpec::text("assigned_to").max_length(100),
    FieldSpec::date("due_date"),
    PRIORITY,
    FieldSpec::status(&["TODO", "IN_PROGRESS", "REVIEW", "DONE"], "TODO"),
];

pub const TASK: EntitySchema = EntitySchema::new("task", "tasks", TASK_FIELDS)
    .list(ListSpec::new(
        &["title", "description"],
        &["status", "priority", "assigned_to"],
    ));

const TICKET_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("subject").required().length(5, 200),
    FieldSpec::text("description").required().length(10, 5000),
    FieldSpec::uuid_ref("client_id"),
    FieldSpec::text("assigned_to").max_length(100),
    PRIORITY,
    FieldSpec::enumeration("type", &["BUG", "FEATURE", "SUPPORT", "QUESTION"])
        .default_text("SUPPORT"),
    FieldSpec::status(&["OPEN", "IN_PROGRESS", "RESOLVED", "CLOSED"], "OPEN"),
];

pub const TICKET: EntitySchema = EntitySchema::new("ticket", "tickets", TICKET_FIELDS)
    .list(ListSpec::new(
        &["subject", "description"],
        &["status", "priority", "type"],
    ));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{validate, FieldValue, Mode, Payload};
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    const CLIENT_ID: &str = "5f0c9a52-6f43-4b8e-9a57-0d3c8b1f2a10";

    #[test]
    fn project_end_date_cannot_precede_start() {
        let failure = validate(
            &payload(json!({
                "name": "Website",
                "client_id": CLIENT_ID,
                "start_date": "2024-05-01",
                "end_date": "2024-04-30"
            })),
            &PROJECT,
            Mode::Create,
        )
        .unwrap_err();
        assert_eq!(
            failure.messages(),
            vec!["End date must be on or after start date"]
        );
    }

    #[test]
    fn project_progress_is_bounded() {
        for (progress, ok) in [(0, true), (100, true), (101, false), (-1, false)] {
            let result = validate(
                &payload(json!({
                    "name": "Website",
                    "client_id": CLIENT_ID,
                    "start_date": "2024-05-01",
                    "progress": progress
                })),
                &PROJECT,
                Mode::Create,
            );
            assert_eq!(result.is_ok(), ok, "progress {progress}");
        }
    }

    #[test]
    fn ticket_defaults() {
        let out = validate(
            &payload(json!({
                "subject": "Login broken",
                "description": "Cannot sign in since update"
            })),
            &TICKET,
            Mode::Create,
        )
        .unwrap();
        assert_eq!(out.get("priority"), Some(&FieldValue::Text("MEDIUM".into())));
        assert_eq!(out.get("type"), Some(&FieldValue::Text("SUPPORT".into())));
        assert_eq!(out.get("status"), Some(&FieldValue::Text("OPEN".into())));
        assert!(out.get("assigned_to").is_none());
    }

    #[test]
    fn client_requires_valid_email() {
        let failure = validate(
            &payload(json!({"name": "Acme", "email": "acme"})),
            &CLIENT,
            Mode::Create,
        )
        .unwrap_err();
        assert_eq!(failure.messages(), vec!["Email must be a valid email address"]);
    }

    #[test]
    fn task_priority_is_closed() {
        let failure = validate(
            &payload(json!({
                "title": "Write copy",
                "project_id": CLIENT_ID,
                "priority": "critical"
            })),
            &TASK,
            Mode::Create,
        )
        .unwrap_err();
        assert_eq!(
            failure.messages(),
            vec!["Priority must be one of: LOW, MEDIUM, HIGH, URGENT"]
        );
    }
}
