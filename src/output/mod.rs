//! Terminal rendering for presentations

use std::fmt::Write as _;

use crate::error::FrameLensResult;
use crate::presenter::Presentation;

/// Render a presentation as aligned label/value text.
pub fn render_text(presentation: &Presentation) -> String {
    let mut out = String::new();
    match presentation {
        Presentation::Raw { rows } => {
            render_rows(&mut out, rows);
        }
        Presentation::Prettified { groups } => {
            for (index, group) in groups.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "[{}]", group.category);
                render_rows(&mut out, &group.rows);
            }
        }
    }
    out
}

/// Render a presentation as pretty-printed JSON.
pub fn render_json(presentation: &Presentation) -> FrameLensResult<String> {
    Ok(serde_json::to_string_pretty(presentation)?)
}

fn render_rows(out: &mut String, rows: &[crate::domain::model::DisplayRow]) {
    let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    for row in rows {
        let _ = writeln!(out, "  {:<width$}  {}", row.label, row.value, width = width);
    }
}
