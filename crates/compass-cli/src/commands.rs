use anyhow::{Context, Result};
use compass_api::{GenerationSummary, SearchFilter, load_records, search};
use compass_cli::config::CompassConfig;
use compass_cli::pipeline::{BuildOutcome, ImportOutcome, run_build, run_generate, run_import};
use compass_model::ControlRecord;
use tracing::info;

use crate::cli::{GenerateArgs, ImportArgs, SearchArgs, SourceArgs};
use crate::summary::{print_categories, print_search_results};

pub fn run_import_command(args: &ImportArgs, config: &CompassConfig) -> Result<ImportOutcome> {
    let output = args.output.as_ref().unwrap_or(&config.import.output);
    run_import(&config.import.sources, output)
}

pub fn run_generate_command(
    args: &GenerateArgs,
    config: &CompassConfig,
) -> Result<GenerationSummary> {
    let source = args.source.as_ref().unwrap_or(&config.api.source);
    let output_dir = args.output_dir.as_ref().unwrap_or(&config.api.output_dir);
    run_generate(source, output_dir, &generate_options(args, config))
}

pub fn run_build_command(args: &GenerateArgs, config: &CompassConfig) -> Result<BuildOutcome> {
    let output_dir = args.output_dir.as_ref().unwrap_or(&config.api.output_dir);
    run_build(
        &config.import.sources,
        &config.import.output,
        output_dir,
        &generate_options(args, config),
    )
}

pub fn run_search_command(args: &SearchArgs, config: &CompassConfig) -> Result<()> {
    let records = load_source(&args.source, config)?;
    let filter = SearchFilter {
        query: args.query.clone(),
        standard: args.standard.clone(),
        category: args.category.clone(),
    };
    let found = search(&records, &filter);
    info!(matches = found.len(), total = records.len(), "search complete");
    if args.json {
        let json = serde_json::to_string_pretty(&found).context("serialize search results")?;
        println!("{json}");
    } else {
        print_search_results(&found);
    }
    Ok(())
}

pub fn run_categories_command(args: &SourceArgs, config: &CompassConfig) -> Result<()> {
    let records = load_source(args, config)?;
    print_categories(&records);
    Ok(())
}

fn generate_options(args: &GenerateArgs, config: &CompassConfig) -> compass_api::GenerateOptions {
    let options = config.api.generate_options();
    match &args.base_url {
        Some(url) => options.with_base_url(url.clone()),
        None => options,
    }
}

fn load_source(args: &SourceArgs, config: &CompassConfig) -> Result<Vec<ControlRecord>> {
    let source = args.source.as_ref().unwrap_or(&config.api.source);
    load_records(source).with_context(|| format!("load record set {}", source.display()))
}
