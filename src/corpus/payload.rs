// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::Document;

/// A corpus serialized as one JSON file: `{"documents": [{"id": .., "text": ..}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusPayload {
    pub documents: Vec<Document>,
}

impl CorpusPayload {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid corpus JSON")
    }
}

/// Read a JSON corpus payload from `path`.
pub fn load_payload(path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus file {}", path.display()))?;
    let payload = CorpusPayload::from_json_str(&content)
        .with_context(|| format!("failed to parse corpus file {}", path.display()))?;
    Ok(payload.documents)
}
