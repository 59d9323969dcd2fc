//! # Entity Catalog
//!
//! One [`EntitySchema`] per dashboard entity. This is the single source of
//! truth for field constraints, lifecycle statuses and list configuration;
//! adding an entity means declaring it in one of the submodules and listing
//! it in [`SCHEMAS`].
//!
//! | Area | Entities |
//! |------|----------|
//! | [`content`] | category, article, faq, service, portfolio, testimonial |
//! | [`crm`] | client, project, task, ticket |
//! | [`accounts`] | user, social_post |
//! | [`finance`] | invoice, expense |

use crate::error::{BackofficeError, Result};
use crate::schema::EntitySchema;

pub mod accounts;
pub mod content;
pub mod crm;
pub mod finance;

pub use accounts::{SOCIAL_POST, USER};
pub use content::{ARTICLE, CATEGORY, FAQ, PORTFOLIO, SERVICE, TESTIMONIAL};
pub use crm::{CLIENT, PROJECT, TASK, TICKET};
pub use finance::{EXPENSE, INVOICE};

/// Shared value sets.
pub const ACTIVE_STATUSES: &[&str] = &["ACTIVE", "INACTIVE"];
pub const PUBLISH_STATUSES: &[&str] = &["DRAFT", "PUBLISHED", "ARCHIVED"];
pub const REVIEW_STATUSES: &[&str] = &["PENDING", "APPROVED", "REJECTED"];
pub const PRIORITIES: &[&str] = &["LOW", "MEDIUM", "HIGH", "URGENT"];
pub const LANGUAGES: &[&str] = &["en", "ar"];

/// Registry of every entity schema, in menu order.
pub const SCHEMAS: &[&EntitySchema] = &[
    &CATEGORY,
    &ARTICLE,
    &FAQ,
    &SERVICE,
    &PORTFOLIO,
    &TESTIMONIAL,
    &CLIENT,
    &PROJECT,
    &TASK,
    &TICKET,
    &USER,
    &SOCIAL_POST,
    &INVOICE,
    &EXPENSE,
];

/// Look up a schema by entity name.
pub fn find_schema(name: &str) -> Option<&'static EntitySchema> {
    SCHEMAS.iter().copied().find(|schema| schema.name == name)
}

/// Look up a schema by entity name, failing with [`BackofficeError::UnknownEntity`].
pub fn get_schema(name: &str) -> Result<&'static EntitySchema> {
    find_schema(name).ok_or_else(|| BackofficeError::UnknownEntity(name.to_string()))
}

pub fn schema_names() -> impl Iterator<Item = &'static str> {
    SCHEMAS.iter().map(|schema| schema.name)
}
