use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use braid_core::errors::ErrorInfo;
use braid_core::{BraidError, BraidWord};
use tracing::info;

use crate::aggregate::Aggregate;
use crate::config::{ExportFormat, RunConfig};
use crate::kernel::RunSummary;
use crate::log::TrialLog;
use crate::manifest::RunManifest;

/// Default export filename for `format`.
pub fn default_file_name(format: ExportFormat, only_braidreps: bool) -> PathBuf {
    let stem = if only_braidreps {
        "braidreps"
    } else {
        "braidreps_and_Logs"
    };
    PathBuf::from(format!("{stem}.{}", format.extension()))
}

/// Writes the aggregate as a tab-separated table.
///
/// Columns are an unnamed row index, `braidreps` and, unless `only_braidreps`
/// is set, `Logs`.
pub fn write_csv(
    path: &Path,
    aggregate: &Aggregate,
    only_braidreps: bool,
) -> Result<(), BraidError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|err| csv_error("export-csv-open", path, err))?;
    let header: &[&str] = if only_braidreps {
        &["", "braidreps"]
    } else {
        &["", "braidreps", "Logs"]
    };
    writer
        .write_record(header)
        .map_err(|err| csv_error("export-csv-write", path, err))?;
    for (row, word) in aggregate.braidreps.iter().enumerate() {
        let mut record = vec![row.to_string(), render_list(word)];
        if !only_braidreps {
            let log = aggregate.logs.get(row).cloned().unwrap_or_default();
            record.push(render_log(&log, path)?);
        }
        writer
            .write_record(&record)
            .map_err(|err| csv_error("export-csv-write", path, err))?;
    }
    writer
        .flush()
        .map_err(|err| io_error("export-csv-flush", path, err))?;
    info!(path = %path.display(), rows = aggregate.len(), "wrote csv export");
    Ok(())
}

/// Writes braidreps one per line, a blank line, then (unless
/// `only_braidreps`) one log per line followed by a blank line.
pub fn write_txt(
    path: &Path,
    aggregate: &Aggregate,
    only_braidreps: bool,
) -> Result<(), BraidError> {
    let file = File::create(path).map_err(|err| io_error("export-txt-open", path, err))?;
    let mut out = BufWriter::new(file);
    let write = |out: &mut BufWriter<File>, line: &str| {
        writeln!(out, "{line}").map_err(|err| io_error("export-txt-write", path, err))
    };
    for word in &aggregate.braidreps {
        write(&mut out, &word.to_string())?;
    }
    write(&mut out, "")?;
    if !only_braidreps {
        for log in &aggregate.logs {
            write(&mut out, &render_log(log, path)?)?;
        }
        write(&mut out, "")?;
    }
    out.flush()
        .map_err(|err| io_error("export-txt-flush", path, err))?;
    info!(path = %path.display(), rows = aggregate.len(), "wrote txt export");
    Ok(())
}

/// Writes the aggregate as pretty JSON.
pub fn write_json(path: &Path, aggregate: &Aggregate) -> Result<(), BraidError> {
    let json = serde_json::to_string_pretty(aggregate).map_err(|err| {
        BraidError::Serde(
            ErrorInfo::new("export-json-serialize", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    fs::write(path, json).map_err(|err| io_error("export-json-write", path, err))?;
    info!(path = %path.display(), rows = aggregate.len(), "wrote json export");
    Ok(())
}

/// Writes the export and manifest of a finished run into `run_dir`.
pub fn write_run(
    run_dir: &Path,
    config: &RunConfig,
    summary: &RunSummary,
) -> Result<RunManifest, BraidError> {
    fs::create_dir_all(run_dir).map_err(|err| io_error("run-dir-mkdir", run_dir, err))?;
    let output = &config.output;
    let data_file = output.resolved_data_file();
    let data_path = run_dir.join(&data_file);
    match output.format {
        ExportFormat::Csv => write_csv(&data_path, &summary.aggregate, output.only_braidreps)?,
        ExportFormat::Txt => write_txt(&data_path, &summary.aggregate, output.only_braidreps)?,
        ExportFormat::Json => write_json(&data_path, &summary.aggregate)?,
    }
    let manifest = RunManifest {
        config: config.clone(),
        master_seed: summary.master_seed,
        seed_label: config.seed_policy.label.clone(),
        braidreps: summary.aggregate.len(),
        aggregate_hash: summary.aggregate_hash.clone(),
        final_word: summary.final_word.clone(),
        data_file,
    };
    manifest.write(&run_dir.join(&output.manifest_file))?;
    Ok(manifest)
}

/// Renders a word as a bracketed, comma-separated list.
pub fn render_list(word: &BraidWord) -> String {
    let letters: Vec<String> = word.elements().iter().map(i32::to_string).collect();
    format!("[{}]", letters.join(", "))
}

fn render_log(log: &TrialLog, path: &Path) -> Result<String, BraidError> {
    serde_json::to_string(log).map_err(|err| {
        BraidError::Serde(
            ErrorInfo::new("export-log-serialize", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> BraidError {
    BraidError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

fn csv_error(code: &str, path: &Path, err: csv::Error) -> BraidError {
    BraidError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}
