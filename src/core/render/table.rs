/// Column alignment in the markdown separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Minimal GitHub-flavoured markdown table.
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        MarkdownTable {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Append a row; cells are escaped here, so callers pass raw text.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows
            .push(cells.iter().map(|cell| escape_cell(cell)).collect());
    }

    pub fn render(&self) -> String {
        let header: Vec<&str> = self.columns.iter().map(|(name, _)| *name).collect();
        let separator: Vec<String> = self
            .columns
            .iter()
            .map(|(name, align)| separator_cell(name.len(), *align))
            .collect();

        let mut lines = vec![row_line(&header), row_line(&separator)];
        lines.extend(self.rows.iter().map(|row| row_line(row)));
        lines.join("\n")
    }
}

fn separator_cell(width: usize, align: Align) -> String {
    match align {
        Align::Left => format!(":{}", "-".repeat(width.max(4) - 1)),
        Align::Center => format!(":{}:", "-".repeat(width.max(4) - 2)),
    }
}

fn row_line<S: AsRef<str>>(cells: &[S]) -> String {
    let body: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("| {} |", body.join(" | "))
}

/// Make text safe for a single table cell: pipes are escaped and line breaks
/// become `<br />`.
pub fn escape_cell(text: &str) -> String {
    text.trim()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('|', "\\|")
        .replace('\n', "<br />")
}

/// Inline code span, widening the fence when the text itself holds backticks.
pub fn code(text: &str) -> String {
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}
