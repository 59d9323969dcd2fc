//! # Configuration
//!
//! Settings are loaded with [`confique`] in priority order:
//!
//! 1. **Environment variables**: `BACKOFFICE_DATA_FILE`, `BACKOFFICE_JSON_OUTPUT`.
//! 2. **Working directory**: `backoffice.toml`.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Command-line flags are applied on top by the CLI.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | none | JSON collections file replacing the built-in seed data |
//! | `json_output` | `false` | Print results as JSON instead of styled text |

use std::path::{Path, PathBuf};

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "backoffice.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BackofficeConfig {
    /// JSON file of entity collections loaded instead of the built-in seed.
    #[config(env = "BACKOFFICE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Emit JSON instead of styled text.
    #[config(env = "BACKOFFICE_JSON_OUTPUT", default = false)]
    pub json_output: bool,
}

impl BackofficeConfig {
    /// Load from the environment, then `dir/backoffice.toml`, then defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(dir.join(CONFIG_FILE)).load()?)
    }

    /// Load from `dir/backoffice.toml` and defaults only.
    pub fn load_file(dir: &Path) -> Result<Self> {
        Ok(Self::builder().file(dir.join(CONFIG_FILE)).load()?)
    }

    /// Resolve `data_file` against `dir` when it is relative.
    pub fn data_path(&self, dir: &Path) -> Option<PathBuf> {
        self.data_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                dir.join(path)
            }
        })
    }
}
