// src/io/mod.rs
pub mod xyz;

use crate::error::{AdjustError, Result};
use crate::model::MolObject;
use std::path::Path;

pub fn load_object(path: &Path) -> Result<MolObject> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xyz" | "extxyz" => xyz::parse(path),
        other => Err(AdjustError::Parse(format!(
            "Unsupported file type: .{}",
            other
        ))),
    }
}
