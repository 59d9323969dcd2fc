//! # Schema Registry
//!
//! Declarative record schemas and the single validator that interprets them.
//!
//! Every entity is described by data instead of per-entity rule code:
//!
//! - **Field specs** ([`FieldSpec`]): kind, required flag, inclusive bounds,
//!   creation default, and an optional `translation_of` back-reference for
//!   localized twins (`title` / `title_ar`).
//! - **Entity schemas** ([`EntitySchema`]): ordered fields, cross-field
//!   [`Refinement`]s and the [`ListSpec`] used by list views.
//! - **Validation** ([`validate`]): payload + schema + [`Mode`] in, either a
//!   [`ValidatedPayload`] or a [`ValidationFailure`] listing every problem.
//!
//! ## Field Kinds
//!
//! | Kind | Accepts | Stored as |
//! |------|---------|-----------|
//! | `Text`, `Email`, `Url`, `Slug`, `Enum` | string | `Text` |
//! | `Number` | number or numeric string | `Number` |
//! | `Integer` | whole number or numeric string | `Integer` |
//! | `Boolean` | bool, `"true"`, `"false"` | `Bool` |
//! | `Date` | `YYYY-MM-DD` | `Date` |
//! | `DateTime` | RFC 3339 | `DateTime` (UTC) |
//! | `UuidRef` | UUID string | `Uuid` |
//! | `TextList` | string array or comma-separated string | `List` |
//!
//! ## Usage
//!
//! ```
//! use backoffice::entities::CATEGORY;
//! use backoffice::schema::{validate, Mode, Payload};
//! use serde_json::json;
//!
//! let payload: Payload = json!({"name": "  Jo  ", "slug": "jo"})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//! let normalized = validate(&payload, &CATEGORY, Mode::Create).unwrap();
//! assert_eq!(normalized.get("name").and_then(|v| v.as_text()), Some("Jo"));
//! ```

mod failure;
pub mod rules;
mod spec;
mod validate;
mod value;

pub use failure::{FieldError, ValidationFailure, NO_CHANGE_MESSAGE, PAYLOAD_FIELD};
pub use spec::{EntitySchema, FieldDefault, FieldKind, FieldSpec, ListSpec, Mode, Refinement};
pub use validate::{validate, Payload, ValidatedPayload};
pub(crate) use validate::check_id;
pub use value::FieldValue;
