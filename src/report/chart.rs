//! Horizontal bar charts for the terminal.

use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

pub struct ChartRow {
    pub label: String,
    pub value: f64,
}

impl ChartRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Render rows as right-aligned labels followed by bars scaled to the
/// largest value. `width` is the length of the longest bar in cells;
/// `unit` is appended to the printed value.
pub fn render(rows: &[ChartRow], width: usize, colour: Colour, unit: &str) -> String {
    let label_w = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.label.as_str()))
        .max()
        .unwrap_or(0);

    let max = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for row in rows {
        let bar_len = if max > 0.0 {
            ((row.value / max) * width as f64).round() as usize
        } else {
            0
        };

        let bar = "▇".repeat(bar_len);
        let padding = " ".repeat(label_w.saturating_sub(UnicodeWidthStr::width(row.label.as_str())));

        out.push_str(&format!(
            "{}{} {} {:.1}{}\n",
            padding,
            row.label,
            colour.paint(bar),
            row.value,
            unit
        ));
    }

    out
}
