//! Invoices and expenses.

use crate::schema::{EntitySchema, FieldSpec, ListSpec, Refinement};

const INVOICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("invoice_number").required().length(1, 50),
    FieldSpec::uuid_ref("client_id").required(),
    FieldSpec::date("issue_date").required(),
    FieldSpec::date("due_date").required(),
    FieldSpec::number("amount").required().at_least(0.0),
    FieldSpec::number("tax").range(0.0, 100.0),
    FieldSpec::text("notes").max_length(1000),
    FieldSpec::status(&["DRAFT", "SENT", "PAID", "OVERDUE", "CANCELLED"], "DRAFT"),
];

pub const INVOICE: EntitySchema = EntitySchema::new("invoice", "invoices", INVOICE_FIELDS)
    .refine(&[Refinement::DateOrder {
        start: "issue_date",
        end: "due_date",
    }])
    .list(ListSpec::new(&["invoice_number", "notes"], &["status"]));

const EXPENSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("description").required().length(3, 500),
    FieldSpec::number("amount").required().at_least(0.0),
    FieldSpec::enumeration(
        "category",
        &["OFFICE", "TRAVEL", "SOFTWARE", "MARKETING", "SALARIES", "OTHER"],
    )
    .default_text("OTHER"),
    FieldSpec::date("date").required(),
    FieldSpec::text("vendor").max_length(100),
    FieldSpec::url("receipt_url"),
    FieldSpec::status(&["PENDING", "APPROVED", "REJECTED"], "PENDING"),
];

pub const EXPENSE: EntitySchema = EntitySchema::new("expense", "expenses", EXPENSE_FIELDS)
    .list(ListSpec::new(&["description", "vendor"], &["category", "status"]));
