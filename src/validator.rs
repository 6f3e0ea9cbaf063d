use anyhow::{Context as _, Result};
use derive_more::Display;
use futures::{StreamExt as _, stream};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::marker::Marker;

/// A file that contains the marker. Displays as the diagnostic line.
#[derive(Debug, Display, PartialEq, Eq)]
#[display("Error in {}: contains '{}'", path.display(), marker)]
pub struct Violation {
    pub path: PathBuf,
    pub marker: String,
}

/// Check content that has already been read from `path`.
pub fn check_content(path: &Path, content: &[u8], marker: &Marker) -> Option<Violation> {
    marker.is_found_in(content).then(|| Violation {
        path: path.to_owned(),
        marker: marker.as_str().to_owned(),
    })
}

/// Read a file and check it. Failing to read it is an error, not a pass.
pub async fn check_file(path: &Path, marker: &Marker) -> Result<Option<Violation>> {
    debug!("Checking {}", path.display());
    let content = fs::read(path)
        .await
        .with_context(|| format!("Reading {}", path.display()))?;
    Ok(check_content(path, &content, marker))
}

/// Check all `files`, reading up to `max_parallelism` of them at once.
///
/// `report` is called for each violation in the same order as `files`, so
/// the output doesn't depend on the parallelism. The first file that can't
/// be read stops the scan; violations in earlier files have already been
/// reported by then.
pub async fn scan_files(
    files: &[PathBuf],
    marker: &Marker,
    max_parallelism: usize,
    mut report: impl FnMut(&Violation),
) -> Result<Vec<Violation>> {
    let mut results = std::pin::pin!(
        stream::iter(files)
            .map(|path| check_file(path, marker))
            .buffered(max_parallelism.max(1))
    );

    let mut violations = Vec::new();
    while let Some(result) = results.next().await {
        if let Some(violation) = result? {
            report(&violation);
            violations.push(violation);
        }
    }

    info!(
        "Checked {} files, {} contain '{}'",
        files.len(),
        violations.len(),
        marker.as_str()
    );
    Ok(violations)
}
