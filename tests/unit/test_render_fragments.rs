use workflowdoc::core::config::RenderConfig;
use workflowdoc::core::render::{assemble, render_bundle, render_triggers};
use workflowdoc::core::types::LineBreaks;
use workflowdoc::core::workflow::WorkflowDocument;

fn bundle_for(yaml: &str, config: &RenderConfig) -> workflowdoc::core::DocsBundle {
    let document = WorkflowDocument::parse(yaml).expect("valid yaml");
    render_bundle(&document, config)
}

#[test]
fn empty_inputs_render_the_placeholder() {
    let bundle = bundle_for("inputs: {}\n", &RenderConfig::default());
    assert_eq!(bundle.inputs, "## Inputs\n\nThis workflow has no inputs.");
}

#[test]
fn absent_sections_render_their_empty_form() {
    let bundle = bundle_for("jobs: {}\n", &RenderConfig::default());
    assert_eq!(bundle.description, "");
    assert!(bundle.inputs.ends_with("This workflow has no inputs."));
    assert!(bundle.outputs.ends_with("This workflow has no outputs."));
    assert!(bundle
        .triggers
        .ends_with("This workflow does not declare any triggers."));
}

#[test]
fn workflow_name_opens_the_document() {
    let config = RenderConfig::default();
    let markdown = assemble(&bundle_for("name: Deploy Site\non: push\n", &config), &config);
    assert!(markdown.starts_with("# Deploy Site\n\n## Inputs\n"));
}

#[test]
fn scalar_triggers_render() {
    let bundle = bundle_for("on: push\n", &RenderConfig::default());
    assert_eq!(bundle.triggers, "## Triggers\n\n- `push`");
}

#[test]
fn sequence_triggers_render() {
    let bundle = bundle_for("on: [push, pull_request]\n", &RenderConfig::default());
    assert_eq!(bundle.triggers, "## Triggers\n\n- `push`\n- `pull_request`");
}

#[test]
fn mapping_triggers_render() {
    let bundle = bundle_for(
        "on:\n  push:\n    branches: [main]\n  pull_request:\n",
        &RenderConfig::default(),
    );
    assert_eq!(
        bundle.triggers,
        "## Triggers\n\n- `push`\n  - branches: `main`\n- `pull_request`"
    );
}

#[test]
fn unusual_trigger_shapes_never_fail() {
    let odd: serde_yaml::Value = serde_yaml::from_str("[push, {pull_request: {types: [opened]}}, 42]").unwrap();
    let rendered = render_triggers(Some(&odd), &Default::default(), &RenderConfig::default());
    assert!(rendered.contains("- `push`"));
    assert!(rendered.contains("- `pull_request`\n  - types: `opened`"));
    assert!(rendered.contains("- `42`"));
}

#[test]
fn toc_level_controls_heading_depth() {
    let config = RenderConfig {
        toc_level: 4,
        ..RenderConfig::default()
    };
    let bundle = bundle_for("description: Deploys\non: push\n", &config);
    assert!(bundle.description.starts_with("#### Description\n"));
    assert!(bundle.inputs.starts_with("#### Inputs\n"));
    assert!(bundle.outputs.starts_with("#### Outputs\n"));
    assert!(bundle.triggers.starts_with("#### Triggers\n"));
}

#[test]
fn line_break_style_applies_to_every_terminator() {
    let yaml = "description: |\n  First line\n  Second line\ninputs:\n  a:\n    required: true\non: [push]\n";

    let crlf = RenderConfig {
        line_breaks: LineBreaks::Crlf,
        ..RenderConfig::default()
    };
    let markdown = assemble(&bundle_for(yaml, &crlf), &crlf);
    assert!(markdown.contains("\r\n"));
    assert_eq!(markdown.matches('\n').count(), markdown.matches("\r\n").count());

    let lf = RenderConfig::default();
    let markdown = assemble(&bundle_for(yaml, &lf), &lf);
    assert!(markdown.contains('\n'));
    assert!(!markdown.contains('\r'));
}

#[test]
fn rendering_is_deterministic() {
    let yaml = "inputs:\n  z: {}\n  a: {}\n  m: {}\non:\n  schedule:\n    - cron: '0 0 * * *'\n  push:\n";
    let config = RenderConfig::default();
    let first = assemble(&bundle_for(yaml, &config), &config);
    let second = assemble(&bundle_for(yaml, &config), &config);
    assert_eq!(first, second);

    let z = first.find("`z`").unwrap();
    let a = first.find("`a`").unwrap();
    let m = first.find("`m`").unwrap();
    assert!(z < a && a < m);
}
