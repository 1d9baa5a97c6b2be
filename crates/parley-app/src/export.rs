//! Saving a transcript as an HTML document.

use std::path::{Path, PathBuf};

use parley_common::ParleyError;
use parley_session::markup::transcript_html;
use parley_session::Snapshot;
use tracing::info;

/// File name used when `/export` is given no path.
pub fn default_export_path() -> PathBuf {
    PathBuf::from(
        chrono::Local::now()
            .format("parley-%Y%m%d-%H%M%S.html")
            .to_string(),
    )
}

/// Write the transcript to `path`, returning the path written.
pub fn export_transcript(
    snapshot: &Snapshot,
    title: &str,
    path: &Path,
) -> parley_common::Result<PathBuf> {
    if snapshot.is_empty() {
        return Err(ParleyError::Export("nothing to export yet".into()));
    }

    std::fs::write(path, transcript_html(snapshot, title))
        .map_err(|e| ParleyError::Export(format!("failed to write {}: {e}", path.display())))?;

    info!(turns = snapshot.len(), "exported transcript to {}", path.display());
    Ok(path.to_path_buf())
}
