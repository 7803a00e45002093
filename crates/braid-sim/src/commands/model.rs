use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use braid_core::BraidWord;
use braid_mcmc::export;
use braid_mcmc::{run as run_chain, ExportFormat, RunConfig};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// YAML run configuration; flags below override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Starting word as comma separated letters, e.g. `1,-2,3`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub word: Option<Vec<i32>>,
    /// Maximum generator magnitude.
    #[arg(long)]
    pub maxgen: Option<u32>,
    /// Maximum word length.
    #[arg(long)]
    pub maxlen: Option<usize>,
    /// Number of braidreps to generate.
    #[arg(long)]
    pub braidreps: Option<usize>,
    /// Markov steps per braidrep.
    #[arg(long)]
    pub msteps: Option<usize>,
    /// Seed of the random source.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Label recorded in the manifest.
    #[arg(long)]
    pub label: Option<String>,
    /// Export format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Export braidreps only, without logs.
    #[arg(long)]
    pub only_braidreps: bool,
    /// Output directory for the export and manifest.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Txt,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Txt => ExportFormat::Txt,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Serialize)]
struct ModelReport {
    braidreps: usize,
    aggregate_hash: String,
    final_word: BraidWord,
    acceptance_rates: BTreeMap<String, f64>,
    data_file: PathBuf,
    manifest: PathBuf,
}

pub fn run(args: &ModelArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    config.validate()?;
    info!(
        word = ?config.initial_word,
        maxgen = config.bounds.max_gen,
        maxlen = config.bounds.max_len,
        "starting model run"
    );

    let summary = run_chain(&config)?;
    let manifest = export::write_run(&args.out, &config, &summary)?;

    let report = ModelReport {
        braidreps: manifest.braidreps,
        aggregate_hash: manifest.aggregate_hash,
        final_word: manifest.final_word,
        acceptance_rates: summary.acceptance_rates,
        data_file: args.out.join(&manifest.data_file),
        manifest: args.out.join(&config.output.manifest_file),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn resolve_config(args: &ModelArgs) -> Result<RunConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(word) = &args.word {
        config.initial_word = word.clone();
    }
    if let Some(maxgen) = args.maxgen {
        config.bounds.max_gen = maxgen;
    }
    if let Some(maxlen) = args.maxlen {
        config.bounds.max_len = maxlen;
    }
    if let Some(braidreps) = args.braidreps {
        config.num_braidreps = braidreps;
    }
    if let Some(msteps) = args.msteps {
        config.msteps = msteps;
    }
    if let Some(seed) = args.seed {
        config.seed_policy.master_seed = seed;
    }
    if let Some(label) = &args.label {
        config.seed_policy.label = Some(label.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if args.only_braidreps {
        config.output.only_braidreps = true;
    }
    Ok(config)
}
