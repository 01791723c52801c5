//! Dumps of responses that failed to normalize.
//!
//! Unrecognized shapes are easiest to fix with the payload at hand, so callers
//! can write it out before reporting the error.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;
use tracing::info;

use crate::error::Result;

/// Write a payload to `<dir>/<timestamp>.json` and return the path.
///
/// The timestamp uses `_` instead of `:` so the name is valid everywhere; a
/// numeric suffix is added when a dump from the same second already exists.
pub fn dump_payload<P: AsRef<Path>>(dir: P, payload: &Value) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y-%m-%dT%H_%M_%S").to_string();
    let mut path = dir.join(format!("{}.json", stamp));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{}_{}.json", stamp, n));
        n += 1;
    }

    fs::write(&path, serde_json::to_vec_pretty(payload)?)?;
    info!("Dump file saved to {}", path.display());

    Ok(path)
}
