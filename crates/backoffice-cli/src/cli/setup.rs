use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "backoffice",
    bin_name = "backoffice",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inspect dashboard schemas, validate payloads and filter collections", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// JSON collections file to use instead of the built-in seed data
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print JSON instead of styled text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entity names
    #[command(display_order = 1)]
    Schemas,

    /// Show an entity's fields, search fields and facets
    #[command(display_order = 2)]
    Describe {
        /// Entity name (see `backoffice schemas`)
        entity: String,
    },

    /// Validate a JSON payload against an entity schema
    #[command(display_order = 3)]
    Validate {
        entity: String,

        /// Payload file, or `-` for stdin
        #[arg(value_name = "FILE")]
        payload: String,

        /// Validate as a partial update (requires `id`)
        #[arg(long)]
        update: bool,
    },

    /// Search and filter an entity's collection
    #[command(alias = "ls", display_order = 4)]
    List {
        entity: String,

        /// Case-insensitive text search over the entity's searchable fields
        #[arg(short, long)]
        search: Option<String>,

        /// Exact-match filter, repeatable (`status=ACTIVE`, `priority=all`)
        #[arg(short, long = "facet", value_name = "NAME=VALUE", value_parser = parse_facet)]
        facets: Vec<(String, String)>,
    },

    /// Show one record
    #[command(display_order = 5)]
    Get { entity: String, id: String },
}

pub fn parse_facet(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_facets() {
        let cli = Cli::try_parse_from([
            "backoffice",
            "list",
            "task",
            "--search",
            "copy",
            "-f",
            "status=TODO",
            "--facet",
            "priority=all",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::List {
                entity,
                search,
                facets,
            } => {
                assert_eq!(entity, "task");
                assert_eq!(search.as_deref(), Some("copy"));
                assert_eq!(
                    facets,
                    vec![
                        ("status".to_string(), "TODO".to_string()),
                        ("priority".to_string(), "all".to_string())
                    ]
                );
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn parses_validate_update_from_stdin() {
        let cli = Cli::try_parse_from(["backoffice", "validate", "faq", "-", "--update"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Validate { ref entity, ref payload, update: true } if entity == "faq" && payload == "-"
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["backoffice", "schemas", "-v", "--data", "x.json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn facet_requires_equals() {
        assert!(parse_facet("status").is_err());
        assert!(parse_facet("=ACTIVE").is_err());
        assert_eq!(
            parse_facet("status = ACTIVE").unwrap(),
            ("status".to_string(), "ACTIVE".to_string())
        );
    }
}
