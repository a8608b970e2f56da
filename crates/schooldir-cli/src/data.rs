//! Read models: loading school and draft records from JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use schooldir_model::{DraftRecord, SchoolRecord};

/// Load the school records file.
pub fn load_schools(path: &Path) -> Result<Vec<SchoolRecord>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

/// Load the editorial drafts file.
pub fn load_drafts(path: &Path) -> Result<Vec<DraftRecord>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

/// Write the drafts file back after a status change.
pub fn save_drafts(path: &Path, drafts: &[DraftRecord]) -> Result<()> {
    let text = serde_json::to_string_pretty(drafts).context("serialize drafts")?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}

/// Find a school by id.
pub fn find_school<'a>(schools: &'a [SchoolRecord], id: &str) -> Option<&'a SchoolRecord> {
    schools.iter().find(|school| school.id == id)
}
