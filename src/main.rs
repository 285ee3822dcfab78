// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use keyscan::cli::render::{print_matches, print_report, print_skipped, ReportJson};
use keyscan::cli::{Cli, Commands, QueryArgs};
use keyscan::corpus::{load_corpus, LoadedCorpus};
use keyscan::{explain, search, Document};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    route_panics_to_log();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env("KEYSCAN_LOG").unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Send panic messages through the logger instead of raw stderr.
///
/// Scoring catches a document's panic and reports it as a skipped document
/// with its own `warn!`, so the hook's copy only shows up with `-v`.
fn route_panics_to_log() {
    std::panic::set_hook(Box::new(|info| {
        debug!("{info}");
    }));
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            corpus,
            query,
            limit,
            sequential,
            json,
        } => run_search(&corpus, &query, limit, sequential, json),
        Commands::Matches { file, query } => run_matches(&file, &query),
    }
}

fn run_search(corpus_path: &Path, query: &QueryArgs, limit: Option<usize>, sequential: bool, json: bool) -> Result<()> {
    let mut options = query.options().context("failed to load search options")?;
    if let Some(limit) = limit {
        options.result_limit = limit;
    }
    if sequential {
        options.parallel = false;
    }

    let corpus = load_with_progress(corpus_path)?;
    info!(
        documents = corpus.documents.len(),
        skipped = corpus.skipped.len(),
        path = %corpus_path.display(),
        "corpus loaded"
    );

    let keywords = query.keywords();
    let report = search(&corpus.documents, &keywords, &options)?;

    if json {
        let payload = ReportJson::new(&report, &corpus.skipped);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_report(&report, &keywords, &options);
        print_skipped(&corpus.skipped);
        print_skipped(&report.skipped);
    }
    Ok(())
}

fn run_matches(file: &Path, query: &QueryArgs) -> Result<()> {
    let options = query.options().context("failed to load search options")?;
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let id = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let document = Document::from_utf8(id, bytes)?;

    let matches = explain(&document, &query.keywords(), &options)?;
    print_matches(&document.id, &matches);
    Ok(())
}

#[cfg(feature = "parallel")]
fn load_with_progress(path: &Path) -> Result<LoadedCorpus> {
    if !path.is_dir() {
        return load_corpus(path);
    }

    let progress = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}") {
        progress.set_style(style.progress_chars("━━╸"));
    }
    progress.set_prefix("Loading");

    let corpus = keyscan::corpus::load_directory_with_progress(path, &progress)?;
    progress.finish_and_clear();
    Ok(corpus)
}

#[cfg(not(feature = "parallel"))]
fn load_with_progress(path: &Path) -> Result<LoadedCorpus> {
    load_corpus(path)
}
