use super::DocsBundle;
use crate::core::config::RenderConfig;
use crate::core::types::LineBreaks;

/// Join the non-empty fragments in section order, one blank line apart, using
/// the configured line terminator throughout.
pub fn assemble(bundle: &DocsBundle, config: &RenderConfig) -> String {
    let sections: Vec<&str> = bundle
        .fragments()
        .into_iter()
        .map(|fragment| fragment.trim_end_matches(|c: char| c == '\r' || c == '\n'))
        .filter(|fragment| !fragment.is_empty())
        .collect();
    normalize_line_breaks(&sections.join("\n\n"), config.line_breaks)
}

/// Rewrite every `\r\n`, lone `\r` and `\n` as the requested terminator.
pub fn normalize_line_breaks(text: &str, line_breaks: LineBreaks) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    match line_breaks {
        LineBreaks::Lf => unified,
        LineBreaks::Crlf => unified.replace('\n', "\r\n"),
    }
}
