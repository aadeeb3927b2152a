use std::fs;
use tempfile::TempDir;
use workflowdoc::core::types::{ErrorCategory, LineBreaks};
use workflowdoc::core::{
    generate_workflow_docs, generate_workflow_markdown_docs, GenerateOptions, RenderConfig,
};

const BUILD_WORKFLOW: &str = r#"
description: Builds the app
inputs:
  target:
    required: true
    default: release
outputs: {}
on: push
"#;

fn write_workflow(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("build.yml");
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_sections_are_assembled_in_order() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);

    let outcome = generate_workflow_markdown_docs(&GenerateOptions::new(&workflow))
        .await
        .unwrap();
    let markdown = outcome.markdown;

    let description = markdown.find("## Description").unwrap();
    let inputs = markdown.find("## Inputs").unwrap();
    let outputs = markdown.find("## Outputs").unwrap();
    let triggers = markdown.find("## Triggers").unwrap();
    assert!(description < inputs && inputs < outputs && outputs < triggers);

    assert!(markdown.contains("Builds the app"));
    assert!(markdown.contains("| `target` |  | `release` | yes |  |"));
    assert!(markdown.contains("This workflow has no outputs."));
    assert!(markdown.contains("- `push`"));
    assert!(outcome.readme.is_none());
}

#[tokio::test]
async fn test_missing_description_is_skipped() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, "on: push\n");

    let outcome = generate_workflow_markdown_docs(&GenerateOptions::new(&workflow))
        .await
        .unwrap();
    assert!(outcome.markdown.starts_with("## Inputs"));
    assert!(!outcome.markdown.contains("## Description"));
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);
    let options = GenerateOptions::new(&workflow);

    let first = generate_workflow_markdown_docs(&options).await.unwrap();
    let second = generate_workflow_markdown_docs(&options).await.unwrap();
    assert_eq!(first.markdown, second.markdown);
    assert_eq!(first.bundle, second.bundle);
}

#[tokio::test]
async fn test_crlf_output() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);
    let mut options = GenerateOptions::new(&workflow);
    options.render.line_breaks = LineBreaks::Crlf;

    let outcome = generate_workflow_markdown_docs(&options).await.unwrap();
    assert!(outcome.markdown.contains("## Inputs\r\n\r\n"));
    assert_eq!(
        outcome.markdown.matches('\n').count(),
        outcome.markdown.matches("\r\n").count()
    );
}

#[tokio::test]
async fn test_reusable_workflow_inputs_and_secrets() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(
        &dir,
        r#"
name: Deploy
on:
  workflow_call:
    inputs:
      environment:
        description: Target environment
        type: string
        required: true
    outputs:
      url:
        description: Deployed URL
        value: ${{ jobs.deploy.outputs.url }}
    secrets:
      token:
        description: Deploy token
        required: true
"#,
    );

    let bundle = generate_workflow_docs(&workflow, &RenderConfig::default())
        .await
        .unwrap();
    assert!(bundle
        .inputs
        .contains("| `environment` | Target environment |  | yes | `string` |"));
    assert!(bundle.outputs.contains("| `url` | Deployed URL |"));
    assert!(bundle.triggers.contains("- `workflow_call`: reusable workflow"));
    assert!(bundle.triggers.contains("### Secrets"));
    assert!(bundle.triggers.contains("| `token` | Deploy token | yes |"));
    assert!(!bundle.triggers.contains("  - inputs"));
}

#[tokio::test]
async fn test_malformed_yaml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, "inputs: [unclosed\n");

    let err = generate_workflow_markdown_docs(&GenerateOptions::new(&workflow))
        .await
        .unwrap_err();
    assert_eq!(err.category, ErrorCategory::ParseError);
}

#[tokio::test]
async fn test_missing_workflow_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let err = generate_workflow_markdown_docs(&GenerateOptions::new(dir.path().join("nope.yml")))
        .await
        .unwrap_err();
    assert_eq!(err.category, ErrorCategory::FileNotFound);
    assert!(err.is_read_failure());
}

#[tokio::test]
async fn test_failed_readme_update_keeps_markdown() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);
    let readme = dir.path().join("README.md");
    fs::write(&readme, "# Project\n\nNo markers here.\n").unwrap();

    let mut options = GenerateOptions::new(&workflow);
    options.update_readme = true;
    options.readme.file = readme.clone();

    let outcome = generate_workflow_markdown_docs(&options).await.unwrap();
    assert!(outcome.markdown.contains("## Inputs"));
    let err = outcome.readme_error().unwrap();
    assert_eq!(err.category, ErrorCategory::MarkerNotFound);
    assert_eq!(
        fs::read_to_string(&readme).unwrap(),
        "# Project\n\nNo markers here.\n"
    );
}

#[tokio::test]
async fn test_readme_update_injects_markdown() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);
    let readme = dir.path().join("README.md");
    fs::write(&readme, "# Project\n<!--start-->old<!--end-->\nFooter\n").unwrap();

    let mut options = GenerateOptions::new(&workflow);
    options.update_readme = true;
    options.readme.file = readme.clone();

    let outcome = generate_workflow_markdown_docs(&options).await.unwrap();
    let update = outcome.readme.unwrap().unwrap();
    assert!(update.changed);

    let expected = format!(
        "# Project\n<!--start-->{}<!--end-->\nFooter\n",
        outcome.markdown
    );
    assert_eq!(fs::read_to_string(&readme).unwrap(), expected);
}

#[tokio::test]
async fn test_output_file_failure_leaves_readme_untouched() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);
    let readme = dir.path().join("README.md");
    let original = "# P\n<!--start-->old<!--end-->\n";
    fs::write(&readme, original).unwrap();

    let mut options = GenerateOptions::new(&workflow);
    options.update_readme = true;
    options.readme.file = readme.clone();
    options.output_file = Some(dir.path().join("missing").join("dir").join("out.md"));

    let err = generate_workflow_markdown_docs(&options).await.unwrap_err();
    assert_eq!(err.category, ErrorCategory::FileWriteError);
    assert_eq!(fs::read_to_string(&readme).unwrap(), original);
}

#[tokio::test]
async fn test_output_file_is_written_alongside_readme() {
    let dir = TempDir::new().unwrap();
    let workflow = write_workflow(&dir, BUILD_WORKFLOW);
    let readme = dir.path().join("README.md");
    fs::write(&readme, "<!--start--><!--end-->").unwrap();
    let output = dir.path().join("DOCS.md");

    let mut options = GenerateOptions::new(&workflow);
    options.update_readme = true;
    options.readme.file = readme.clone();
    options.output_file = Some(output.clone());

    let outcome = generate_workflow_markdown_docs(&options).await.unwrap();
    assert!(outcome.readme.unwrap().unwrap().changed);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("{}\n", outcome.markdown)
    );
}
