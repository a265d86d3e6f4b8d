use crate::dependency_management::domain::{Dependency, SortDescriptor, SortKey, SortOrder};
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const NAME_HEADER: &str = "Name";
const VERSION_HEADER: &str = "Version";
const INSTALLED_HEADER: &str = "Installed";
const TYPE_HEADER: &str = "Type";

/// Printed in the marker column of outdated rows
const OUTDATED_MARKER: &str = "!";

const COLUMN_GAP: &str = "  ";

/// TableFormatter adapter for the terminal listing
///
/// Renders one row per dependency with the active sort column marked by
/// ▲ (ascending) or ▼ (descending) and outdated rows flagged with `!`.
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Plain output for files and pipes
    pub fn without_color() -> Self {
        Self { colored: false }
    }

    fn sort_arrow(order: SortOrder) -> &'static str {
        match order {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }

    fn header(title: &str, key: SortKey, sort: SortDescriptor) -> String {
        if sort.key == key {
            format!("{} {}", title, Self::sort_arrow(sort.order))
        } else {
            title.to_string()
        }
    }

    fn pad(text: &str, width: usize) -> String {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for TableFormatter {
    fn format(&self, dependencies: &[Dependency], sort: SortDescriptor) -> Result<String> {
        if dependencies.is_empty() {
            return Ok("No dependencies found.\n".to_string());
        }

        let headers = [
            Self::header(NAME_HEADER, SortKey::Name, sort),
            VERSION_HEADER.to_string(),
            INSTALLED_HEADER.to_string(),
            Self::header(TYPE_HEADER, SortKey::Type, sort),
        ];
        let rows: Vec<[String; 4]> = dependencies
            .iter()
            .map(|d| {
                [
                    d.name.clone(),
                    d.version.clone(),
                    d.installed_version.clone().unwrap_or_else(|| "-".to_string()),
                    d.dependency_type.as_str().to_string(),
                ]
            })
            .collect();

        let mut widths = headers.each_ref().map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        // Trailing column is not padded
        let render_line = |cells: &[String; 4]| -> String {
            let mut line = String::new();
            for (i, cell) in cells.iter().enumerate() {
                if i + 1 == cells.len() {
                    line.push_str(cell);
                } else {
                    line.push_str(&Self::pad(cell, widths[i]));
                    line.push_str(COLUMN_GAP);
                }
            }
            line
        };

        let blank_marker = Self::pad("", OUTDATED_MARKER.len() + 1);
        let mut output = String::new();
        let header_line = format!("{}{}", blank_marker, render_line(&headers));
        if self.colored {
            output.push_str(&header_line.bold().to_string());
        } else {
            output.push_str(&header_line);
        }
        output.push('\n');

        for (dependency, row) in dependencies.iter().zip(&rows) {
            let line = render_line(row);
            if dependency.outdated {
                let marked = format!("{} {}", OUTDATED_MARKER, line);
                if self.colored {
                    output.push_str(&marked.yellow().to_string());
                } else {
                    output.push_str(&marked);
                }
            } else {
                output.push_str(&blank_marker);
                output.push_str(&line);
            }
            output.push('\n');
        }

        Ok(output)
    }
}
