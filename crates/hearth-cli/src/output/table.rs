//! Plain-text tables for tickets, workflow cards, and chat transcripts.

/// Column that gets tinted when color is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tint {
    None,
    Status,
    Urgency,
}

/// Columns are shrunk from the widest down to this many characters.
const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// A titled grid of string cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    title: Option<String>,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            title: None,
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Two-column `field | value` view of one record.
    #[must_use]
    pub fn record(fields: Vec<(&'static str, String)>) -> Self {
        let mut table = Self::new(&["field", "value"]);
        for (field, value) in fields {
            table.push(vec![field.to_string(), value]);
        }
        table
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        if let Some(title) = &self.title {
            lines.push(format!("{title} ({})", self.rows.len()));
        }
        if self.rows.is_empty() {
            lines.push("(none)".to_string());
            return lines.join("\n");
        }

        let widths = self.column_widths(options.max_width);
        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&clip(header, *width), *width))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(header.trim_end().to_string());
        lines.push("-".repeat(header.trim_end().chars().count()));

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = row.get(index).map_or("-", String::as_str);
                    let padded = pad(&clip(cell, *width), *width);
                    if options.color {
                        tint(&padded, cell, self.tint_for(index))
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn tint_for(&self, column: usize) -> Tint {
        match self.headers.get(column).copied() {
            Some("status" | "value") => Tint::Status,
            Some("urgency" | "priority") => Tint::Urgency,
            _ => Tint::None,
        }
    }

    /// Natural widths, then the widest column trimmed until the row fits.
    fn column_widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let mut widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        let Some(max_width) = max_width else {
            return widths;
        };
        let gutters = widths.len().saturating_sub(1) * 2;
        while widths.iter().sum::<usize>() + gutters > max_width {
            let Some((widest, width)) = widths
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, width)| *width > MIN_COLUMN_WIDTH)
                .max_by_key(|(_, width)| *width)
            else {
                break;
            };
            widths[widest] = width - 1;
        }
        widths
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped = value.chars().take(width.saturating_sub(1)).collect::<String>();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

/// Wrap an already padded cell in an ANSI color picked from its raw value.
fn tint(padded: &str, raw: &str, kind: Tint) -> String {
    let code = match (kind, raw) {
        (Tint::Status, "resolved" | "done") | (Tint::Urgency, "low") => "32",
        (Tint::Status, "open" | "pending") | (Tint::Urgency, "medium") => "33",
        (Tint::Status, "in_progress") => "36",
        (Tint::Urgency, "high" | "urgent") => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn tickets() -> Table {
        let mut table = Table::new(&["id", "urgency", "status", "description"]);
        table.push(vec![
            "REQ001".to_string(),
            "high".to_string(),
            "in_progress".to_string(),
            "Kitchen sink is leaking underneath".to_string(),
        ]);
        table.push(vec![
            "REQ003".to_string(),
            "low".to_string(),
            "resolved".to_string(),
            "Light fixture flickering".to_string(),
        ]);
        table
    }

    #[test]
    fn renders_header_divider_and_rows() {
        let out = tickets().titled("Tickets").render(PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Tickets (2)");
        assert!(lines[1].starts_with("id      urgency  status"));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].starts_with("REQ001  high     in_progress"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn empty_table_says_none() {
        let out = Table::new(&["id"]).titled("Workflow").render(PLAIN);
        assert_eq!(out, "Workflow (0)\n(none)");
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let out = tickets().render(TableOptions {
            max_width: Some(40),
            color: false,
        });
        assert!(out.lines().all(|line| line.chars().count() <= 40));
        assert!(out.contains('…'));
    }

    #[test]
    fn status_and_urgency_columns_are_tinted() {
        let out = tickets().render(TableOptions {
            max_width: None,
            color: true,
        });
        assert!(out.contains("\u{1b}[31mhigh"));
        assert!(out.contains("\u{1b}[32mresolved"));
        // descriptions are never tinted, even when they contain a status word
        assert!(!out.contains("\u{1b}[33mKitchen"));
    }

    #[test]
    fn record_view_lists_fields_in_order() {
        let out = Table::record(vec![
            ("id", "REQ001".to_string()),
            ("status", "open".to_string()),
        ])
        .render(PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "id      REQ001");
        assert_eq!(lines[3], "status  open");
    }

    #[test]
    fn clip_marks_truncation() {
        assert_eq!(clip("Kitchen sink is leaking", 8), "Kitchen…");
        assert_eq!(clip("sink", 8), "sink");
    }
}
