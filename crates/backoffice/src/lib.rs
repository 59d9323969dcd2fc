//! # Backoffice Architecture
//!
//! Backoffice is the **data layer of an admin dashboard**: declarative entity
//! schemas, the validator that interprets them, and the search/facet filter
//! shared by every list view. Screens, forms and tables are external
//! collaborators that call into this crate; the bundled `backoffice` binary is
//! just one of them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (backoffice-cli crate)                                 │
//! │  - Parses arguments, renders results, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves entity names and ids, dispatches to commands    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create/update/delete/get/list over a Repository          │
//! └─────────────────────────────────────────────────────────────┘
//!              │                                │
//!              ▼                                ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────┐
//! │  schema/ + entities/      │   │  filter/                    │
//! │  - Field specs, validate  │   │  - Search + facet predicate │
//! └───────────────────────────┘   └─────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Repository trait, InMemoryRepository, seed collections   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Core
//!
//! [`schema::validate`] and [`filter::filter`] are pure functions: no I/O, no
//! shared state, same input always gives the same output. Collections are
//! passed in explicitly (a slice or a [`store::Repository`]), never read from
//! globals.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: CRUD and list logic
//! - [`entities`]: The fourteen entity schemas
//! - [`schema`]: Field specs and the validator
//! - [`filter`]: Search and facet filtering
//! - [`model`]: Stored [`model::Record`]
//! - [`store`]: Repository abstraction and seed data
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod filter;
pub mod model;
pub mod schema;
pub mod store;
