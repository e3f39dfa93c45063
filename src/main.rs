//! `sim` — detect duplicated and similar runs of tokens across source
//! files.
//!
//! Ingests files into a Token Store and Text Registry, builds a
//! Forward-Reference Index, scans for maximal matching runs, then
//! either lists the runs (sorted by the Run Collector) or aggregates
//! per-file-pair overlap percentages, depending on `--percentage`.
mod cli;
/// Run Collector: sorted storage of scanned runs (spec.md §4.5).
mod collector;
/// Validated run configuration (spec.md §4.2).
mod config;
/// The core's error type.
mod error;
/// Forward-Reference Index: hash-chained same-window lookups (spec.md §4.3).
mod fref;
/// Lexer contract plus a reference whitespace-splitting implementation.
mod lexer;
/// Percentage Aggregator: per-file-pair overlap accounting (spec.md §4.6).
mod percent;
/// Text Registry: the table of ingested files and their token ranges.
mod registry;
/// Output sink contract plus text/JSON reference implementations.
mod report;
/// Run Scanner: chain-walking, seed extension, policy filters (spec.md §4.4).
mod scanner;
/// Token Store: the append-only token sequence (spec.md §4.1).
mod store;
/// Filesystem walking to turn path arguments into file lists.
mod walk;

use std::path::PathBuf;

use clap::Parser;

use cli::Cli;
use collector::RunCollector;
use config::ConfigBuilder;
use error::CoreError;
use lexer::{Lexer, WhitespaceLexer};
use percent::PercentageAggregator;
use registry::TextRegistry;
use report::{JsonSink, OutputSink, TextSink};
use scanner::scan_runs;
use store::TokenStore;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CoreError> {
    let percentage_mode = cli.percentage || cli.main_contributor_only;
    let mut builder = ConfigBuilder::new()
        .min_run_size(cli.min_run_size)
        .separate_each(cli.separate_each)
        .no_self(cli.no_self)
        .new_vs_old(cli.new_vs_old)
        .main_contributor_only(cli.main_contributor_only)
        .percentage_mode(percentage_mode);
    if let Some(t) = cli.threshold {
        builder = builder.threshold_percentage(t);
    }
    let config = builder.build()?;

    let new_files = resolve_files(&cli.paths)?;
    let old_files = resolve_files(&cli.old_paths)?;
    if new_files.is_empty() && old_files.is_empty() {
        return Err(CoreError::configuration("no input files given"));
    }

    let mut store = TokenStore::new();
    let mut registry = TextRegistry::new();
    let mut lexer = WhitespaceLexer::new();

    for path in &new_files {
        ingest_file(path, &mut store, &mut registry, &mut lexer)?;
    }
    let new_old_boundary = registry.len();
    for path in &old_files {
        ingest_file(path, &mut store, &mut registry, &mut lexer)?;
    }
    if !old_files.is_empty() {
        registry.set_new_old_boundary(new_old_boundary);
    }
    store.freeze();

    let index = fref::ForwardRefIndex::build(&store, &registry, config.min_run_size, |tok| {
        lexer.may_be_start_of_run(tok)
    })?;

    if percentage_mode {
        let mut aggregator = PercentageAggregator::new();
        scan_runs(&store, &registry, &index, &config, |run| {
            aggregator.add_run(&run, &registry);
        })?;
        if cli.json {
            let mut sink = JsonSink::new();
            aggregator.print(&config, |a, b, p| sink.report_percentage(a, b, p));
            println!("{}", sink.to_json().map_err(|e| CoreError::resource(e.to_string()))?);
        } else {
            let mut sink = TextSink::new();
            aggregator.print(&config, |a, b, p| sink.report_percentage(a, b, p));
            for line in sink.into_lines() {
                println!("{line}");
            }
        }
    } else {
        let mut collector = RunCollector::new();
        scan_runs(&store, &registry, &index, &config, |run| {
            collector.insert(run);
        })?;
        if cli.json {
            let mut sink = JsonSink::new();
            report::report_runs(collector.into_vec(), &registry, &mut sink);
            println!("{}", sink.to_json().map_err(|e| CoreError::resource(e.to_string()))?);
        } else {
            let mut sink = TextSink::new();
            report::report_runs(collector.into_vec(), &registry, &mut sink);
            for line in sink.into_lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Expand a list of path arguments (files or directories) into a flat,
/// deterministically ordered list of files.
fn resolve_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CoreError> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(walk::collect_files(path)?);
    }
    Ok(files)
}

/// Read one file, tokenize it, and register it as a Text spanning the
/// tokens it contributed to the Token Store.
fn ingest_file(
    path: &PathBuf,
    store: &mut TokenStore,
    registry: &mut TextRegistry,
    lexer: &mut impl Lexer,
) -> Result<(), CoreError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| CoreError::resource(format!("reading {}: {err}", path.display())))?;
    let start = store.length();
    for tok in lexer.tokenize(&contents) {
        store.push(tok)?;
    }
    let limit = store.length();
    registry.register_text(path.display().to_string(), start, limit, start)?;
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
