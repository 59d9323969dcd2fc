//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! front end (the bundled CLI, a web handler, a test).
//!
//! The facade:
//! - **Resolves entity names** to their [`EntitySchema`] (unknown names fail
//!   with [`BackofficeError::UnknownEntity`])
//! - **Normalizes inputs**: identifier strings are parsed and deduplicated
//!   while preserving order
//! - **Dispatches** to `commands::*::run` and returns their [`CmdResult`]
//!
//! Business rules live in the command and schema modules, not here.
//!
//! ## Generic Over Repository
//!
//! `BackofficeApi<R: Repository>` owns its repository, so the same code runs
//! against the seeded in-memory store in the CLI and against fixtures in tests.

use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;

use crate::commands::{self, CmdResult};
use crate::entities::{get_schema, SCHEMAS};
use crate::error::{BackofficeError, Result};
use crate::filter::FilterCriteria;
use crate::schema::{check_id, validate, EntitySchema, Mode, Payload, ValidatedPayload};
use crate::store::Repository;

pub struct BackofficeApi<R: Repository> {
    repo: R,
}

impl<R: Repository> BackofficeApi<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Every registered schema, in menu order.
    pub fn schemas(&self) -> &'static [&'static EntitySchema] {
        SCHEMAS
    }

    pub fn schema(&self, entity: &str) -> Result<&'static EntitySchema> {
        get_schema(entity)
    }

    /// Dry-run validation: nothing is stored.
    pub fn validate(&self, entity: &str, payload: &Payload, mode: Mode) -> Result<ValidatedPayload> {
        let schema = get_schema(entity)?;
        Ok(validate(payload, schema, mode)?)
    }

    pub fn create(&mut self, entity: &str, payload: &Payload) -> Result<CmdResult> {
        let schema = get_schema(entity)?;
        commands::create::run(&mut self.repo, schema, payload)
    }

    pub fn update(&mut self, entity: &str, payload: &Payload) -> Result<CmdResult> {
        let schema = get_schema(entity)?;
        commands::update::run(&mut self.repo, schema, payload)
    }

    pub fn delete<I: AsRef<str>>(&mut self, entity: &str, ids: &[I]) -> Result<CmdResult> {
        let schema = get_schema(entity)?;
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.repo, schema, &ids)
    }

    pub fn get(&self, entity: &str, id: &str) -> Result<CmdResult> {
        let schema = get_schema(entity)?;
        let id = parse_id(id)?;
        commands::get::run(&self.repo, schema, &id)
    }

    pub fn list(&self, entity: &str, criteria: &FilterCriteria) -> Result<CmdResult> {
        let schema = get_schema(entity)?;
        commands::list::run(&self.repo, schema, criteria)
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    check_id(Some(&Value::String(raw.to_string())))
        .map_err(|error| BackofficeError::Validation(error.into()))
}

/// Parse identifiers, dropping repeats but keeping first-seen order.
fn parse_ids<I: AsRef<str>>(raw: &[I]) -> Result<Vec<Uuid>> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(raw.len());
    for input in raw {
        let id = parse_id(input.as_ref())?;
        if seen.insert(id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
