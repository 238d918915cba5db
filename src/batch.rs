use std::path::{Path, PathBuf};

use glob::glob;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::error::Result;
use crate::io::object_from_json;
use crate::schema::{CapturePayload, ExtractResponse, extract};

fn json_filter(rp: glob::GlobResult) -> Option<PathBuf> {
    match rp {
        // outputs of a previous run live next to the inputs
        Ok(p) if p.to_string_lossy().ends_with(".features.json") => None,
        Ok(p) if p.is_file() => Some(p),
        Ok(_) => None,
        Err(e) => {
            log::warn!("skipping unreadable path: {}", e);
            None
        }
    }
}

/// Loads every `*.json` capture payload in `dir`, sorted by path.
///
/// Files named `*.features.json` and files that don't parse as a payload are skipped.
pub fn load_payloads(dir: impl AsRef<Path>) -> Result<Vec<(PathBuf, CapturePayload)>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        )
        .into());
    }
    let pattern = dir.join("*.json");
    let mut paths: Vec<PathBuf> = glob(&pattern.to_string_lossy())?
        .filter_map(json_filter)
        .collect();
    paths.sort();
    log::trace!("found {} payloads in {}", paths.len(), dir.display());

    Ok(paths
        .into_iter()
        .filter_map(|p| match object_from_json(&p) {
            Ok(payload) => Some((p, payload)),
            Err(e) => {
                log::warn!("skipping malformed payload {}: {}", p.display(), e);
                None
            }
        })
        .collect())
}

/// Runs [`extract`] on every payload in parallel. Results keep input order.
pub fn process_batch(payloads: &[CapturePayload]) -> Vec<Result<ExtractResponse>> {
    payloads
        .par_iter()
        .progress_count(payloads.len() as u64)
        .map(extract)
        .collect()
}
