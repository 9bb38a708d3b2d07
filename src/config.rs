use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strum::Display;

use crate::clock::{Clock, FixedClock, SystemClock};

const DEFAULT_COUNT: usize = 1;
const MAX_COUNT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Number of animals to generate
    pub count: usize,
    pub format: OutputFormat,
    /// Pinned evaluation instant; the system clock is used when absent
    pub now: Option<DateTime<FixedOffset>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            format: OutputFormat::default(),
            now: None,
        }
    }
}

impl ReportConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            count: cli_count,
            format: cli_format,
            now: cli_now,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            count: file_count,
            format: file_format,
            now: file_now,
        } = file_config;

        Ok(Self {
            count: cli_count.or(file_count).unwrap_or(DEFAULT_COUNT),
            format: cli_format.or(file_format).unwrap_or_default(),
            now: cli_now.or(file_now),
        })
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.count > 0, "count must be at least 1");
        anyhow::ensure!(
            self.count <= MAX_COUNT,
            "count {} exceeds the maximum of {}",
            self.count,
            MAX_COUNT
        );
        Ok(())
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.now {
            Some(instant) => Arc::new(FixedClock::new(instant)),
            None => Arc::new(SystemClock),
        }
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "dogcow", about = "Report the next vet checkup for DogCows", version)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "DOGCOW_COUNT",
        value_name = "N",
        help = "Number of DogCows to generate",
        value_parser = clap::value_parser!(usize)
    )]
    pub count: Option<usize>,

    #[arg(
        long,
        env = "DOGCOW_FORMAT",
        value_enum,
        value_name = "FORMAT",
        help = "Report format (text or json)"
    )]
    pub format: Option<OutputFormat>,

    #[arg(
        long,
        env = "DOGCOW_NOW",
        value_name = "RFC3339",
        help = "Evaluate checkups as of this instant instead of the system clock",
        value_parser = parse_instant
    )]
    pub now: Option<DateTime<FixedOffset>>,
}

fn parse_instant(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    count: Option<usize>,
    format: Option<OutputFormat>,
    now: Option<DateTime<FixedOffset>>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
