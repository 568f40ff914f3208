// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word lists on disk.
//!
//! One word per line. Surrounding whitespace is trimmed; blank lines and
//! lines starting with `#` are skipped. Duplicates are left in: the tree
//! ignores them on insert.

use anyhow::{Context, Result};
use bktrees::normalize;
use std::fs;
use std::path::Path;

pub fn load(path: &Path, fold: bool) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
    Ok(parse(&text, fold))
}

fn parse(text: &str, fold: bool) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| if fold { normalize(line) } else { line.to_owned() })
        .collect()
}
