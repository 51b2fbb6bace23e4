//! Pipeline stages behind the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use compass_api::{GenerateOptions, GenerationSummary, generate, load_records};
use compass_import::{ImportReport, ImportSource, import_sources, write_records};
use tracing::{info, info_span};

/// Outcome of the import stage.
#[derive(Debug)]
pub struct ImportOutcome {
    pub report: ImportReport,
    pub output: PathBuf,
}

/// Outcome of `build`: both stages in order.
#[derive(Debug)]
pub struct BuildOutcome {
    pub import: ImportOutcome,
    pub generation: GenerationSummary,
}

/// Convert the sources and write the combined record set to `output`.
pub fn run_import(sources: &[ImportSource], output: &Path) -> Result<ImportOutcome> {
    let span = info_span!("stage", name = "import");
    let _guard = span.enter();
    let start = Instant::now();

    let report = import_sources(sources).context("import control sources")?;
    write_records(output, &report.records)
        .with_context(|| format!("write record set {}", output.display()))?;
    info!(
        records = report.total_records(),
        mappings = report.total_mappings(),
        duration_ms = start.elapsed().as_millis(),
        "import stage complete"
    );
    Ok(ImportOutcome {
        report,
        output: output.to_path_buf(),
    })
}

/// Read the record set at `source` and write the API tree to `output_dir`.
pub fn run_generate(
    source: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<GenerationSummary> {
    let span = info_span!("stage", name = "generate");
    let _guard = span.enter();
    let start = Instant::now();

    let records =
        load_records(source).with_context(|| format!("load record set {}", source.display()))?;
    let summary = generate(&records, output_dir, options)
        .with_context(|| format!("generate api under {}", output_dir.display()))?;
    info!(
        files = summary.total_files(),
        duration_ms = start.elapsed().as_millis(),
        "generate stage complete"
    );
    Ok(summary)
}

/// Import, then generate from the record set the import just wrote.
pub fn run_build(
    sources: &[ImportSource],
    record_set: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<BuildOutcome> {
    let import = run_import(sources, record_set)?;
    let generation = run_generate(&import.output, output_dir, options)?;
    Ok(BuildOutcome { import, generation })
}
