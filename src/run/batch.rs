//! Directory batch mode.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use walkdir::WalkDir;

use super::sink::OutputSink;
use super::{run_file, RunReport};
use crate::config::Config;

/// Extensions checked in batch mode, in run order.
const BATCH_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Recursively lists files under `dir` with the given extension, sorted by path.
pub fn discover_inputs(dir: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect()
}

/// Runs every `*.csv` file under `dir`, then every `*.txt` file.
///
/// A file that cannot be read is logged and skipped; the batch continues.
pub async fn run_batch(
    dir: &Path,
    config: &Config,
    client: Arc<reqwest::Client>,
    sink: Arc<dyn OutputSink>,
) -> Vec<RunReport> {
    let mut reports = Vec::new();
    for extension in BATCH_EXTENSIONS {
        let files = discover_inputs(dir, extension);
        info!(
            "Found {} *.{} file{} under {}",
            files.len(),
            extension,
            if files.len() == 1 { "" } else { "s" },
            dir.display()
        );
        for file in files {
            match run_file(&file, config, Arc::clone(&client), Arc::clone(&sink)).await {
                Ok(report) => reports.push(report),
                Err(e) => warn!("Skipping {}: {:#}", file.display(), e),
            }
        }
    }
    reports
}
