//! # Command Layer
//!
//! The business logic of the dashboard's CRUD screens. Each command lives in
//! its own submodule as a plain `run` function over a [`Repository`].
//!
//! ## Role and Responsibilities
//!
//! - Validate incoming payloads against the entity schema
//! - Read and write records through the injected repository
//! - Return a structured [`CmdResult`] with affected/listed records and messages
//!
//! Commands do no terminal I/O and no argument parsing; the CLI (or any other
//! front end) decides how to render a result. A rejected payload is an
//! `Err(BackofficeError::Validation(..))` carrying every field error, so a form
//! can show them all at once.
//!
//! ## Testing Strategy
//!
//! Command tests use [`InMemoryRepository`](crate::store::memory::InMemoryRepository)
//! and cover every branch, including the error paths.
//!
//! ## Command Modules
//!
//! - [`create`]: validate and store a new record
//! - [`update`]: validate a partial payload and merge it
//! - [`delete`]: remove a record
//! - [`get`]: fetch one record
//! - [`list`]: search and facet-filter a collection
//!
//! [`Repository`]: crate::store::Repository

use serde::Serialize;

use crate::model::Record;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Records created, changed or removed by the command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected: Vec<Record>,
    /// Records to display.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed: Vec<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }
}
