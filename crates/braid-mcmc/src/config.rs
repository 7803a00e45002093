use std::fs;
use std::path::{Path, PathBuf};

use braid_core::errors::ErrorInfo;
use braid_core::{BraidError, BraidWord, Bounds};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Starting braid word.
    #[serde(default = "default_initial_word")]
    pub initial_word: Vec<i32>,
    /// Generator and length limits.
    #[serde(default)]
    pub bounds: Bounds,
    /// Number of braidreps (trials) to generate.
    #[serde(default = "default_num_braidreps")]
    pub num_braidreps: usize,
    /// Markov steps per trial.
    #[serde(default = "default_msteps")]
    pub msteps: usize,
    /// Master seed and label.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Export layout.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_initial_word() -> Vec<i32> {
    vec![1, 2, 3]
}

fn default_num_braidreps() -> usize {
    1
}

fn default_msteps() -> usize {
    100
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            initial_word: default_initial_word(),
            bounds: Bounds::default(),
            num_braidreps: default_num_braidreps(),
            msteps: default_msteps(),
            seed_policy: SeedPolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, BraidError> {
        serde_yaml::from_str(text)
            .map_err(|err| BraidError::Config(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, BraidError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            BraidError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            BraidError::Config(info) => {
                BraidError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, BraidError> {
        serde_yaml::to_string(self)
            .map_err(|err| BraidError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
    }

    /// Checks the bounds and the starting word.
    pub fn validate(&self) -> Result<(), BraidError> {
        self.bounds.validate().map_err(into_config_error)?;
        BraidWord::new(self.initial_word.clone())
            .and_then(|word| word.check_bounds(&self.bounds))
            .map_err(into_config_error)
    }
}

fn into_config_error(err: BraidError) -> BraidError {
    BraidError::Config(
        err.info()
            .clone()
            .with_hint("fix `initial_word` or `bounds` in the run configuration"),
    )
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Seed of the run's random source.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded in the manifest.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// File format used for the braidrep export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Tab-separated table with an index column.
    #[default]
    Csv,
    /// One braidrep per line, then one log per line.
    Txt,
    /// Pretty-printed JSON aggregate.
    Json,
}

impl ExportFormat {
    /// File extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Output layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Export format.
    #[serde(default)]
    pub format: ExportFormat,
    /// Export only braidreps, without logs.
    #[serde(default)]
    pub only_braidreps: bool,
    /// Export filename; derived from the format when absent.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Manifest filename.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            only_braidreps: false,
            data_file: None,
            manifest_file: default_manifest_filename(),
        }
    }
}

impl OutputConfig {
    /// Export filename, falling back to `braidreps.<ext>` or
    /// `braidreps_and_Logs.<ext>`.
    pub fn resolved_data_file(&self) -> PathBuf {
        match &self.data_file {
            Some(path) => path.clone(),
            None => crate::export::default_file_name(self.format, self.only_braidreps),
        }
    }
}
