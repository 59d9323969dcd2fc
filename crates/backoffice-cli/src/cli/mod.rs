//! # CLI Behavior
//!
//! One possible client of the backoffice library. It is the only place that
//! knows about terminal output, exit codes and argument parsing.
//!
//! ## Commands
//!
//! - `backoffice schemas`: entity names in menu order
//! - `backoffice describe <entity>`: fields, constraints, search fields and facets
//! - `backoffice validate <entity> [--update] <file|->`: normalized payload or
//!   every field error (exit code 1 on failure)
//! - `backoffice list <entity> [--search S] [--facet name=value]...`
//! - `backoffice get <entity> <id>`
//!
//! ## Data Source
//!
//! Collections come from `--data <file>`, else `data_file` in the config
//! (`backoffice.toml` or `BACKOFFICE_DATA_FILE`), else the built-in seed.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: text and JSON output
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
