use crate::{
    cli::args::{GenerateArgs, OutputFormat},
    core::{
        generate_workflow_markdown_docs, ConfigLoader, ConfigValidator, DocsBundle,
        GenerateOptions, ReadmeUpdate,
    },
    Result,
};
use anyhow::Context;
use serde::Serialize;
use std::{env, io::Write, path::Path};

/// Payload printed by `workflowdoc generate --format json`.
#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    workflow_file: &'a Path,
    #[serde(flatten)]
    sections: &'a DocsBundle,
    markdown: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    readme: Option<&'a ReadmeUpdate>,
}

/// Handles `workflowdoc generate`: prints the markdown first, then surfaces a
/// failed README update as the command's error.
pub async fn generate(args: GenerateArgs) -> Result<()> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let mut config = ConfigLoader::load(args.config.as_deref(), &cwd)?;
    args.apply_overrides(&mut config);
    ConfigValidator::validate(&config)?;

    let options = GenerateOptions {
        workflow_file: args.workflow_file.clone(),
        output_file: args.output.clone(),
        update_readme: args.update_readme,
        readme: config.readme,
        render: config.render,
    };
    let outcome = generate_workflow_markdown_docs(&options).await?;

    let readme_update = match &outcome.readme {
        Some(Ok(update)) => Some(update),
        _ => None,
    };

    let mut stdout = std::io::stdout().lock();
    match args.format {
        OutputFormat::Markdown => {
            write!(
                stdout,
                "{}{}",
                outcome.markdown,
                options.render.line_breaks.as_str()
            )?;
        }
        OutputFormat::Json => {
            let report = GenerateReport {
                workflow_file: &options.workflow_file,
                sections: &outcome.bundle,
                markdown: &outcome.markdown,
                readme: readme_update,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    stdout.flush()?;
    drop(stdout);

    if let Some(update) = readme_update {
        if update.changed {
            tracing::info!(readme = %update.path.display(), "updated README");
        } else {
            tracing::info!(readme = %update.path.display(), "README already up to date");
        }
    }

    match outcome.readme {
        Some(Err(err)) => Err(err.into()),
        _ => Ok(()),
    }
}
