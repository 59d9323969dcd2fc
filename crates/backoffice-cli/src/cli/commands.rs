use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use backoffice::api::BackofficeApi;
use backoffice::config::BackofficeConfig;
use backoffice::error::BackofficeError;
use backoffice::filter::FilterCriteria;
use backoffice::schema::{Mode, Payload};
use backoffice::store::memory::InMemoryRepository;
use backoffice::store::seed::{load_file, seed_repository};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::render;
use super::setup::{Cli, Commands};

/// Everything a handler needs: the API over the loaded collections and the
/// output mode.
struct AppContext {
    api: BackofficeApi<InMemoryRepository>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("cannot read working directory")?;
    let config = BackofficeConfig::load(&cwd)?;
    debug!(?config, "configuration loaded");

    let data_path = cli.data.clone().or_else(|| config.data_path(&cwd));
    let repo = match &data_path {
        Some(path) => load_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => seed_repository()?,
    };
    let ctx = AppContext {
        api: BackofficeApi::new(repo),
        json: cli.json || config.json_output,
    };

    match cli.command {
        Commands::Schemas => handle_schemas(&ctx),
        Commands::Describe { entity } => handle_describe(&ctx, &entity),
        Commands::Validate {
            entity,
            payload,
            update,
        } => handle_validate(&ctx, &entity, &payload, update),
        Commands::List {
            entity,
            search,
            facets,
        } => handle_list(&ctx, &entity, search, facets),
        Commands::Get { entity, id } => handle_get(&ctx, &entity, &id),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_schemas(ctx: &AppContext) -> Result<()> {
    let schemas = ctx.api.schemas();
    if ctx.json {
        print_json(&render::schemas_json(schemas))
    } else {
        print!("{}", render::render_schemas(schemas));
        Ok(())
    }
}

fn handle_describe(ctx: &AppContext, entity: &str) -> Result<()> {
    let schema = ctx.api.schema(entity)?;
    if ctx.json {
        print_json(&render::schema_json(schema))
    } else {
        print!("{}", render::render_schema(schema));
        Ok(())
    }
}

fn read_payload(source: &str) -> Result<Payload> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("reading payload from {source}"))?
    };
    match serde_json::from_str(&raw).context("payload is not valid JSON")? {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("payload must be a JSON object"),
    }
}

fn handle_validate(ctx: &AppContext, entity: &str, source: &str, update: bool) -> Result<()> {
    let payload = read_payload(source)?;
    let mode = if update { Mode::Update } else { Mode::Create };

    match ctx.api.validate(entity, &payload, mode) {
        Ok(validated) => {
            if ctx.json {
                print_json(&validated)
            } else {
                print!("{}", render::render_validated(&validated));
                Ok(())
            }
        }
        Err(BackofficeError::Validation(failure)) => {
            if ctx.json {
                print_json(&failure)?;
            } else {
                print!("{}", render::render_failure(&failure));
            }
            let count = failure.errors().len();
            bail!("{} {} invalid", count, if count == 1 { "field" } else { "fields" })
        }
        Err(other) => Err(other.into()),
    }
}

fn handle_list(
    ctx: &AppContext,
    entity: &str,
    search: Option<String>,
    facets: Vec<(String, String)>,
) -> Result<()> {
    let schema = ctx.api.schema(entity)?;
    let criteria = FilterCriteria {
        search_text: search,
        facets: facets.into_iter().collect(),
    };
    let result = ctx.api.list(entity, &criteria)?;

    if ctx.json {
        return print_json(&result.listed);
    }
    print!("{}", render::render_records(schema, &result.listed));
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

fn handle_get(ctx: &AppContext, entity: &str, id: &str) -> Result<()> {
    let schema = ctx.api.schema(entity)?;
    let result = ctx.api.get(entity, id)?;
    if ctx.json {
        return print_json(&result.listed[..]);
    }
    for record in &result.listed {
        print!("{}", render::render_record(schema, record));
    }
    Ok(())
}
