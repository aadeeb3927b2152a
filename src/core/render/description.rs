use crate::core::config::RenderConfig;

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

/// Opening fragment: the workflow name as a title one level above the
/// sections, then the Description section. Empty when neither is set.
pub fn render_description(
    name: Option<&str>,
    description: Option<&str>,
    config: &RenderConfig,
) -> String {
    let title = non_blank(name).map(|name| format!("{} {}", config.title_heading(), name));
    let section = non_blank(description)
        .map(|text| format!("{} Description\n\n{}", config.heading(), text));

    match (title, section) {
        (Some(title), Some(section)) => format!("{}\n\n{}", title, section),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => String::new(),
    }
}
