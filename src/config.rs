use std::path::Path;

use anyhow::{bail, Context};
use cdjson_core::ParseOptions;
use confique::Config as DeriveConfig;
use serde::Deserialize;
use tracing::*;

/// Looked up in the working directory when no `--config` is given. Missing is fine.
pub const DEFAULT_CONFIG_FILE: &str = "cdjson.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color diagnostics when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn ariadne_config(self) -> ariadne::Config {
        match self {
            ColorChoice::Auto => ariadne::Config::default(),
            ColorChoice::Always => ariadne::Config::default().with_color(true),
            ColorChoice::Never => ariadne::Config::default().with_color(false),
        }
    }
}

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// How many entries a single map or array may hold before parsing fails.
    #[config(default = 10, env = "CDJSON_CONTAINER_CAPACITY")]
    pub container_capacity: usize,

    /// Ignore `container_capacity` and let maps and arrays grow as needed.
    #[config(default = false, env = "CDJSON_UNBOUNDED_CONTAINERS")]
    pub unbounded_containers: bool,

    /// How deeply maps and arrays may be nested.
    #[config(default = 512, env = "CDJSON_MAX_DEPTH")]
    pub max_depth: usize,

    /// Whether diagnostics are colored: `auto`, `always` or `never`.
    #[config(default = "auto", env = "CDJSON_COLOR")]
    pub color: ColorChoice,
}

impl Config {
    /// Environment variables take precedence over the file. An explicitly requested file must
    /// exist; the default one is optional.
    pub fn load_from(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file `{}` does not exist", path.display());
                }
                path
            }
            None => Path::new(DEFAULT_CONFIG_FILE),
        };
        debug!(config_file = ?file);

        Config::builder()
            .env()
            .file(file)
            .load()
            .with_context(|| format!("failed to load configuration from `{}`", file.display()))
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            container_capacity: (!self.unbounded_containers).then_some(self.container_capacity),
            max_depth: self.max_depth,
        }
    }
}
