use colored::Colorize;

use crate::cli::output;

const ELLIPSIS: &str = "...";

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>, width: usize) -> Self {
        Self {
            align: Align::Right,
            ..Self::new(header, width)
        }
    }
}

/// Row data for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        let row = TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
        };
        self.rows.push(row);
    }
}

/// Renders [`Table`] instances using simple padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table) {
        for line in Self::lines(table) {
            output::line(line);
        }
    }

    /// Produces the rendered lines without printing them.
    pub fn lines(table: &Table) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &table.title {
            lines.push(title.bold().to_string());
        }

        let total_width = table
            .columns
            .iter()
            .map(|col| col.width + 3)
            .sum::<usize>()
            .saturating_sub(3)
            .max(1);
        let rule = "-".repeat(total_width);

        let header = table
            .columns
            .iter()
            .map(|col| pad(&col.header, col.width, Align::Left))
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(rule.clone());
        lines.push(header.trim_end().bold().to_string());
        lines.push(rule.clone());

        for row in &table.rows {
            let line = table
                .columns
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let cell = row.cells.get(idx).map(String::as_str).unwrap_or("");
                    pad(&truncate(cell, column.width), column.width, column.align)
                })
                .collect::<Vec<_>>()
                .join(" | ");
            lines.push(line.trim_end().to_string());
        }
        lines.push(rule);
        lines
    }
}

fn truncate(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut shortened: String = cell.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", cell, width = width),
        Align::Right => format!("{:>width$}", cell, width = width),
    }
}
