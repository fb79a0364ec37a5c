//! Minimal markdown table rendering

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Left-aligned (`---`)
    Left,
    /// Right-aligned (`---:`)
    Right,
}

impl Align {
    fn marker(self) -> &'static str {
        match self {
            Align::Left => "---",
            Align::Right => "---:",
        }
    }
}

/// A markdown table with a fixed header
///
/// An empty table still renders its header and separator, followed by an
/// empty body line.
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    /// Create a table with the given header cells
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Append a body row
    pub fn add_row(&mut self, cells: Vec<String>) -> &mut Self {
        self.rows.push(cells);
        self
    }

    /// Number of body rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the body is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header, separator and body, each line terminated by `\n`
    pub fn render(&self) -> String {
        let header: Vec<&str> = self.columns.iter().map(|(name, _)| *name).collect();
        let separator: Vec<&str> = self.columns.iter().map(|(_, align)| align.marker()).collect();
        let body: Vec<String> = self.rows.iter().map(|cells| row(cells)).collect();

        let mut output = String::new();
        output.push_str(&row(&header));
        output.push('\n');
        output.push_str(&row(&separator));
        output.push('\n');
        output.push_str(&body.join("\n"));
        output.push('\n');
        output
    }
}

fn row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(|cell| cell.as_ref()).collect();
    format!("| {} |", cells.join(" | "))
}
