use std::path::PathBuf;

use anyhow::{bail, Context};
use cdjson_core::Value;
use clap::Parser as ClapParser;
use tracing::*;

use crate::config::{ColorChoice, Config};

mod config;
mod diagnostics;
mod logging;
mod query;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a document to read.
    input: PathBuf,

    /// Print the value at a `/`-separated path, e.g. `dddd/1`. May be given several times.
    #[arg(short, long = "query", value_name = "PATH")]
    queries: Vec<String>,

    /// Write a diagnostic dump of the whole document to stderr.
    #[arg(long)]
    dump: bool,

    /// Configuration file. Defaults to `cdjson.toml` in the working directory, if present.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Let maps and arrays grow past the configured capacity.
    #[arg(long)]
    unbounded: bool,

    /// Override the configured diagnostic coloring.
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();

    debug!(input = ?cli.input);

    let config = Config::load_from(cli.config.as_deref())?;
    debug!(?config);

    let color = cli.color.unwrap_or(config.color);
    let mut options = config.parse_options();
    if cli.unbounded {
        options.container_capacity = None;
    }

    let text = match std::fs::read_to_string(&cli.input) {
        Ok(file) => file,
        Err(e) => {
            error!(path = ?cli.input, "failed to read input");
            return Err(e)
                .with_context(|| format!("failed to read file `{}`", cli.input.display()));
        }
    };

    let path = cli.input.display().to_string();

    let root = match cdjson_core::parse_with(&text, &options) {
        Ok(root) => root,
        Err(e) => {
            debug!(error = ?e);
            diagnostics::report_parse_error(&path, &text, &e, color)?;
            bail!("failed to parse `{path}`");
        }
    };

    debug!(kind = %root.kind(), "parsed document");

    if cli.dump {
        eprintln!("{}", root.dump());
    }

    if cli.queries.is_empty() && !cli.dump {
        match &root {
            Value::Map(map) => println!("{path}: map with {} entries", map.len()),
            Value::Array(array) => println!("{path}: array with {} elements", array.len()),
            scalar => println!("{path}: {}", scalar.kind()),
        }
    }

    for q in &cli.queries {
        let value = query::select(&root, q).with_context(|| format!("query `{q}` failed"))?;
        println!("{}", query::render(value));
    }

    Ok(())
}
