// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text corpus directories.
//!
//! Every `*.txt` file in the directory is one document; its id is the file
//! stem. Files are read in parallel but the result is sorted by file name,
//! so corpus positions (and therefore tie order) do not depend on the
//! filesystem or on thread scheduling.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::MatchingFailure;
use crate::types::Document;

/// Documents read from disk, plus files that could not be decoded.
#[derive(Debug, Clone, Default)]
pub struct LoadedCorpus {
    pub documents: Vec<Document>,
    pub skipped: Vec<MatchingFailure>,
}

/// Sorted list of the `*.txt` files directly inside `dir`.
pub fn text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read corpus directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every `*.txt` file in `dir`.
pub fn load_directory(dir: &Path) -> Result<LoadedCorpus> {
    let files = text_files(dir)?;
    load_files(&files, |_, _| {})
}

/// Load every `*.txt` file in `dir`, advancing `progress` as files come in.
#[cfg(feature = "parallel")]
pub fn load_directory_with_progress(dir: &Path, progress: &ProgressBar) -> Result<LoadedCorpus> {
    let files = text_files(dir)?;
    progress.set_length(files.len() as u64);

    load_files(&files, |count, total| {
        progress.set_position(count as u64);
        if count % 10 == 0 || count == total {
            progress.set_message(format!("{count}/{total}"));
        }
    })
}

fn load_files(files: &[PathBuf], on_loaded: impl Fn(usize, usize) + Sync) -> Result<LoadedCorpus> {
    let counter = AtomicUsize::new(0);
    let total = files.len();

    let read = |path: &PathBuf| -> Result<Result<Document, MatchingFailure>> {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
        on_loaded(count, total);
        Ok(Document::from_utf8(document_id(path), bytes))
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = files.par_iter().map(read).collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = files.iter().map(read).collect::<Result<_>>()?;

    let mut corpus = LoadedCorpus::default();
    for outcome in outcomes {
        match outcome {
            Ok(document) => corpus.documents.push(document),
            Err(failure) => {
                warn!(doc_id = failure.doc_id(), error = %failure, "skipping corpus file");
                corpus.skipped.push(failure);
            }
        }
    }

    debug!(
        loaded = corpus.documents.len(),
        skipped = corpus.skipped.len(),
        "corpus directory loaded"
    );
    Ok(corpus)
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
