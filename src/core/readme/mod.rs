#![allow(clippy::result_large_err)]

//! Injection of generated markdown between two marker comments of a README.

use crate::core::config::ReadmeConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Why a marker region could not be located.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("start marker `{0}` not found")]
    MissingStart(String),
    #[error("end marker `{0}` not found")]
    MissingEnd(String),
    #[error("end marker `{end}` appears before start marker `{start}`")]
    Misordered { start: String, end: String },
}

/// Result of a successful README update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadmeUpdate {
    pub path: PathBuf,
    /// False when the region already held the markdown and nothing was written.
    pub changed: bool,
}

/// Replace everything strictly between the first `start` marker and the first
/// `end` marker after it. Text outside the region is kept byte for byte.
pub fn splice_markers(
    content: &str,
    markdown: &str,
    start: &str,
    end: &str,
) -> Result<String, MarkerError> {
    let start_at = content
        .find(start)
        .ok_or_else(|| MarkerError::MissingStart(start.to_string()))?;
    let region_start = start_at + start.len();

    let Some(region_len) = content[region_start..].find(end) else {
        return Err(if content[..start_at].contains(end) {
            MarkerError::Misordered {
                start: start.to_string(),
                end: end.to_string(),
            }
        } else {
            MarkerError::MissingEnd(end.to_string())
        });
    };
    let region_end = region_start + region_len;

    let mut updated = String::with_capacity(content.len() + markdown.len());
    updated.push_str(&content[..region_start]);
    updated.push_str(markdown);
    updated.push_str(&content[region_end..]);
    Ok(updated)
}

/// Rewrite the marker region of `path` with `markdown`.
///
/// The file is left untouched on every failure: the new content is written to a
/// sibling temporary file which then replaces the original in one rename.
#[tracing::instrument(skip_all, fields(readme = %path.display()))]
pub async fn update_readme(
    path: &Path,
    markdown: &str,
    config: &ReadmeConfig,
) -> Result<ReadmeUpdate, AppError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| AppError::from_read(path, err))?;

    let updated = splice_markers(&content, markdown, &config.start_marker, &config.end_marker)
        .map_err(|err| {
            let mut error = AppError::with_source(
                ErrorCategory::MarkerNotFound,
                format!("cannot update {}: {}", path.display(), err),
                Box::new(err),
            )
            .with_suggestion(format!(
                "Add a `{}` line followed by a `{}` line where the documentation belongs",
                config.start_marker, config.end_marker
            ));
            error.add_context("path", &path.display().to_string());
            error
        })?;

    if updated == content {
        tracing::debug!("README already up to date");
        return Ok(ReadmeUpdate {
            path: path.to_path_buf(),
            changed: false,
        });
    }

    write_replacing(path, &updated).await?;
    tracing::info!(bytes = updated.len(), "README updated");

    Ok(ReadmeUpdate {
        path: path.to_path_buf(),
        changed: true,
    })
}

async fn write_replacing(path: &Path, contents: &str) -> Result<(), AppError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            AppError::new(
                ErrorCategory::FileWriteError,
                format!("{} does not name a file", path.display()),
            )
        })?;
    let staging = path.with_file_name(format!(".{}.workflowdoc.tmp", file_name));

    let result = async {
        tokio::fs::write(&staging, contents).await?;
        if let Ok(metadata) = tokio::fs::metadata(path).await {
            tokio::fs::set_permissions(&staging, metadata.permissions()).await?;
        }
        tokio::fs::rename(&staging, path).await
    }
    .await;

    if let Err(err) = result {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(AppError::with_source(
            ErrorCategory::FileWriteError,
            format!("failed to write {}: {}", path.display(), err),
            Box::new(err),
        ));
    }
    Ok(())
}
