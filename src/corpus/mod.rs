// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading a corpus from disk.
//!
//! Two layouts are understood:
//!
//! - a directory of `*.txt` files, one document per file
//! - a single JSON file, `{"documents": [{"id": .., "text": ..}]}`

mod loader;
mod payload;

use std::path::Path;

use anyhow::Result;

pub use loader::{load_directory, text_files, LoadedCorpus};
#[cfg(feature = "parallel")]
pub use loader::load_directory_with_progress;
pub use payload::{load_payload, CorpusPayload};

/// Load `path` as a directory corpus or a JSON payload, whichever it is.
pub fn load_corpus(path: &Path) -> Result<LoadedCorpus> {
    if path.is_dir() {
        load_directory(path)
    } else {
        Ok(LoadedCorpus {
            documents: load_payload(path)?,
            skipped: Vec::new(),
        })
    }
}
