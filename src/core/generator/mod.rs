#![allow(clippy::result_large_err)]

use crate::core::config::{ReadmeConfig, RenderConfig};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::readme::{update_readme, ReadmeUpdate};
use crate::core::render::{assemble, render_bundle, DocsBundle};
use crate::core::workflow::load_workflow;
use std::path::{Path, PathBuf};

/// Everything one generation run needs, resolved once at the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub workflow_file: PathBuf,
    /// Extra copy of the markdown, written before the README is touched.
    pub output_file: Option<PathBuf>,
    pub update_readme: bool,
    pub readme: ReadmeConfig,
    pub render: RenderConfig,
}

impl GenerateOptions {
    /// Defaults: no README update, `README.md`, LF line breaks, level-2 headings.
    pub fn new(workflow_file: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            workflow_file: workflow_file.into(),
            output_file: None,
            update_readme: false,
            readme: ReadmeConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Generated documentation plus the separate outcome of the README update.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub bundle: DocsBundle,
    pub markdown: String,
    /// `None` when no update was requested. A failed update leaves `bundle`
    /// and `markdown` valid.
    pub readme: Option<Result<ReadmeUpdate, AppError>>,
}

impl GenerationOutcome {
    pub fn readme_error(&self) -> Option<&AppError> {
        match &self.readme {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }
}

/// Read, parse and render the four documentation fragments of a workflow file.
#[tracing::instrument(skip_all, fields(workflow = %workflow_file.display()))]
pub async fn generate_workflow_docs(
    workflow_file: &Path,
    config: &RenderConfig,
) -> Result<DocsBundle, AppError> {
    let document = load_workflow(workflow_file).await?;
    tracing::debug!(
        inputs = document.inputs.len(),
        outputs = document.outputs.len(),
        has_triggers = document.triggers.is_some(),
        "parsed workflow"
    );
    Ok(render_bundle(&document, config))
}

/// Generate the assembled markdown and, when requested, inject it into the README.
///
/// Every fatal step (read, parse, output file) runs before the README update,
/// so a fatal error leaves the README as it was.
pub async fn generate_workflow_markdown_docs(
    options: &GenerateOptions,
) -> Result<GenerationOutcome, AppError> {
    let bundle = generate_workflow_docs(&options.workflow_file, &options.render).await?;
    let markdown = assemble(&bundle, &options.render);

    if let Some(path) = &options.output_file {
        write_output(path, &markdown, &options.render).await?;
    }

    let readme = if options.update_readme {
        let result = update_readme(&options.readme.file, &markdown, &options.readme).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "README update failed");
        }
        Some(result)
    } else {
        None
    };

    Ok(GenerationOutcome {
        bundle,
        markdown,
        readme,
    })
}

/// Write the markdown plus one trailing line terminator to `path`.
async fn write_output(path: &Path, markdown: &str, render: &RenderConfig) -> Result<(), AppError> {
    let contents = format!("{}{}", markdown, render.line_breaks.as_str());
    tokio::fs::write(path, contents).await.map_err(|err| {
        let mut error = AppError::with_source(
            ErrorCategory::FileWriteError,
            format!("failed to write {}: {}", path.display(), err),
            Box::new(err),
        );
        error.add_context("path", &path.display().to_string());
        error
    })?;
    tracing::debug!(output = %path.display(), "wrote markdown file");
    Ok(())
}
