//! Startup configuration: CLI flags layered over an optional YAML file

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::constants::{APP_NAME, DEFAULT_BASE_URL, DEFAULT_SPEC_FILE};
use crate::models::InputValues;

#[derive(Parser, Debug, Default)]
#[command(name = "api-term", version, about, long_about = None)]
pub struct CliArgs {
    /// Path to an OpenAPI file (JSON or YAML)
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// URL of an OpenAPI document (can be repeated)
    #[arg(short = 'u', long = "url")]
    pub urls: Vec<String>,

    /// Global query parameter applied to every request (can be repeated)
    #[arg(short = 'q', long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Base URL prepended to every endpoint path
    #[arg(short = 'b', long = "base-url")]
    pub base_url: Option<String>,

    /// Config file (defaults to <config dir>/api-term/config.yaml when present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP timeout in seconds; the client default applies when unset
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl CliArgs {
    pub fn parse_from_args<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CliArgs::parse_from(itr)
    }
}

/// Values accepted in the YAML config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub spec_file: Option<String>,
    pub spec_urls: Vec<String>,
    pub query: BTreeMap<String, String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

/// Resolved configuration handed to the session at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub spec_file: String,
    pub spec_urls: Vec<String>,
    pub global_params: InputValues,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            spec_file: DEFAULT_SPEC_FILE.to_string(),
            spec_urls: Vec::new(),
            global_params: InputValues::new(),
            timeout: None,
        }
    }
}

impl Config {
    /// Build the configuration from CLI args, reading the config file if any
    pub fn load(args: CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            },
        };
        Ok(Config::merge(args, file))
    }

    /// CLI values win over file values, which win over built-in defaults
    pub fn merge(args: CliArgs, file: FileConfig) -> Self {
        let defaults = Config::default();

        let mut spec_urls = file.spec_urls;
        for url in args.urls {
            if !spec_urls.contains(&url) {
                spec_urls.push(url);
            }
        }

        let mut global_params = file.query;
        global_params.extend(parse_global_params(&args.query));

        Config {
            base_url: args.base_url.or(file.base_url).unwrap_or(defaults.base_url),
            spec_file: args.file.or(file.spec_file).unwrap_or(defaults.spec_file),
            spec_urls,
            global_params,
            timeout: args.timeout.or(file.timeout_secs).map(Duration::from_secs),
        }
    }
}

/// `<config dir>/api-term/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.yaml"))
}

/// Parse repeated `key=value` flags; entries without `=` are dropped
pub fn parse_global_params(flags: &[String]) -> InputValues {
    let mut params = InputValues::new();
    for flag in flags {
        match flag.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            None => tracing::warn!(flag = %flag, "Ignoring global query param without '='"),
        }
    }
    params
}
