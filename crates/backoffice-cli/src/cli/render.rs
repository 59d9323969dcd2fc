//! # Rendering
//!
//! Every function here turns library data into a ready-to-print string, so
//! handlers only decide *what* to show. Text output goes through the named
//! styles in [`super::styles`]; JSON output is built from the same data with
//! `serde_json`.

use backoffice::commands::{CmdMessage, MessageLevel};
use backoffice::model::Record;
use backoffice::schema::{EntitySchema, FieldSpec, FieldValue, ValidatedPayload, ValidationFailure};
use serde_json::{json, Value};

use super::styles::{ERROR, FACET, FIELD, INFO, MUTED, SUCCESS, TITLE, WARNING};

const SHORT_ID: usize = 8;

pub fn render_schemas(schemas: &[&EntitySchema]) -> String {
    let width = schemas.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for schema in schemas {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            schema.name,
            MUTED.apply_to(schema.plural)
        ));
    }
    out
}

pub fn schemas_json(schemas: &[&EntitySchema]) -> Value {
    Value::Array(
        schemas
            .iter()
            .map(|s| json!({"name": s.name, "plural": s.plural}))
            .collect(),
    )
}

pub fn render_schema(schema: &EntitySchema) -> String {
    let width = schema.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let mut out = format!(
        "{} {}\n\n",
        TITLE.apply_to(schema.label()),
        MUTED.apply_to(format!("({})", schema.plural))
    );
    for field in schema.fields {
        let name = format!("{:<width$}", field.name);
        out.push_str(&format!(
            "  {}  {}\n",
            FIELD.apply_to(name),
            field_constraints(field)
        ));
    }
    for rule in schema.refinements {
        let [start, end] = rule.fields();
        out.push_str(&format!(
            "\n  {} {end} on or after {start}",
            MUTED.apply_to("rule:")
        ));
    }
    if !schema.refinements.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "\nSearch: {}\nFacets: {}\n",
        schema.list.searchable.join(", "),
        FACET.apply_to(schema.list.facets.join(", "))
    ));
    out
}

pub fn schema_json(schema: &EntitySchema) -> Value {
    let fields: Vec<Value> = schema
        .fields
        .iter()
        .map(|f| {
            json!({
                "name": f.name,
                "kind": f.kind.as_str(),
                "required": f.required,
                "min_length": f.min_length,
                "max_length": f.max_length,
                "min": f.min,
                "max": f.max,
                "values": f.allowed_values(),
                "default": f.default.map(|d| d.to_value()),
                "translation_of": f.translation_of,
            })
        })
        .collect();
    json!({
        "name": schema.name,
        "plural": schema.plural,
        "fields": fields,
        "searchable": schema.list.searchable,
        "facets": schema.list.facets,
    })
}

/// One-line summary of a field declaration, e.g. `text, required, 2-50 chars`.
pub fn field_constraints(field: &FieldSpec) -> String {
    let mut parts = vec![field.kind.as_str().to_string()];
    parts.push(if field.required { "required" } else { "optional" }.to_string());

    match (field.min_length, field.max_length) {
        (Some(min), Some(max)) => parts.push(format!("{min}-{max} chars")),
        (Some(min), None) => parts.push(format!(">= {min} chars")),
        (None, Some(max)) => parts.push(format!("<= {max} chars")),
        (None, None) => {}
    }
    match (field.min, field.max) {
        (Some(min), Some(max)) => parts.push(format!("{min}-{max}")),
        (Some(min), None) => parts.push(format!(">= {min}")),
        (None, Some(max)) => parts.push(format!("<= {max}")),
        (None, None) => {}
    }
    if let Some(values) = field.allowed_values() {
        parts.push(format!("one of {}", values.join("|")));
    }
    if let Some(default) = field.default {
        parts.push(format!("default {}", default.to_value()));
    }
    if let Some(base) = field.translation_of {
        parts.push(format!("translation of {base}"));
    }
    parts.join(", ")
}

fn render_fields<'a>(fields: impl Iterator<Item = (&'a String, &'a FieldValue)>) -> String {
    let fields: Vec<_> = fields.collect();
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, value) in fields {
        let name = format!("{:<width$}", name);
        out.push_str(&format!("  {}  {}\n", FIELD.apply_to(name), value));
    }
    out
}

pub fn render_validated(payload: &ValidatedPayload) -> String {
    let mut out = format!("{}\n", SUCCESS.apply_to("Payload is valid"));
    if let Some(id) = payload.id {
        out.push_str(&format!("  {}  {}\n", FIELD.apply_to("id"), id));
    }
    out.push_str(&render_fields(payload.fields.iter()));
    for name in &payload.cleared {
        out.push_str(&format!(
            "  {}  {}\n",
            FIELD.apply_to(name),
            MUTED.apply_to("(cleared)")
        ));
    }
    out
}

pub fn render_failure(failure: &ValidationFailure) -> String {
    let mut out = String::new();
    for error in failure.errors() {
        out.push_str(&format!(
            "{} {}\n",
            ERROR.apply_to(format!("{}:", error.field)),
            error.message
        ));
    }
    out
}

pub fn render_records(schema: &EntitySchema, records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let id = record.id().to_string();
        let facets: Vec<String> = schema
            .list
            .facets
            .iter()
            .filter_map(|facet| record.get(facet).map(|v| format!("{facet}={v}")))
            .collect();
        out.push_str(&format!(
            "{}  {}  {}\n",
            MUTED.apply_to(&id[..SHORT_ID]),
            record.display_name(schema),
            FACET.apply_to(facets.join(" "))
        ));
    }
    out
}

pub fn render_record(schema: &EntitySchema, record: &Record) -> String {
    let mut out = format!(
        "{} {}\n",
        TITLE.apply_to(record.display_name(schema)),
        MUTED.apply_to(format!("({})", record.id()))
    );
    out.push_str(&render_fields(record.fields().iter()));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => INFO.apply_to(&message.content),
            MessageLevel::Success => SUCCESS.apply_to(&message.content),
            MessageLevel::Warning => WARNING.apply_to(&message.content),
        };
        out.push_str(&format!("{styled}\n"));
    }
    out
}
