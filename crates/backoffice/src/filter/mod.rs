//! # List Filtering
//!
//! Every entity list narrows its collection the same way: a free-text search
//! across the entity's searchable fields, ANDed with equality on zero or more
//! facets (status, priority, type, platform...). The fields involved come from
//! the entity's [`ListSpec`](crate::schema::ListSpec), so one generic
//! [`filter`] serves all fourteen lists.
//!
//! ```
//! use backoffice::entities::CATEGORY;
//! use backoffice::filter::{filter, FilterCriteria};
//! use backoffice::store::seed::seed_repository;
//! use backoffice::store::Repository;
//!
//! let repo = seed_repository().unwrap();
//! let categories = repo.list(CATEGORY.name).unwrap();
//! let criteria = FilterCriteria::new().facet("status", "ACTIVE");
//! let active = filter(&categories, &CATEGORY.list, &criteria);
//! assert!(active.len() < categories.len());
//! ```
//!
//! Filtering never fails. Unknown facet names are dropped with a debug log,
//! records missing a faceted field do not match (unless the facet is
//! [`ALL`]), and the input slice is left untouched.

mod criteria;
mod engine;

pub use criteria::{FilterCriteria, ALL};
pub use engine::{filter, matches, Filterable};
