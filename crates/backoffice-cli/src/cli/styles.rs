//! Terminal styles.
//!
//! Output code refers to styles by meaning (`FIELD`, `MUTED`, `ERROR`), never
//! by color, so the palette can change in one place. `console` drops the
//! escape codes on its own when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static FIELD: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static FACET: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
