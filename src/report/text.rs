use colored::Colorize;

use super::lines::{report_title, StatLine};

/// Plain or terminal-coloured "key: value" block, keys padded to a common width
pub fn render_text(subject: &str, lines: &[StatLine], colorize: bool) -> String {
    let width = lines.iter().map(|l| l.key.len() + 1).max().unwrap_or(0);
    let title = report_title(subject);

    let mut out = Vec::with_capacity(lines.len() + 1);
    out.push(if colorize { title.bold().to_string() } else { title });

    for line in lines {
        let key = format!("{:<width$}", format!("{}:", line.key));
        let rendered = match (colorize, line.available) {
            (false, _) => format!("{key} {}", line.value),
            (true, true) => format!("{} {}", key.bold(), line.value),
            (true, false) => format!("{} {}", key.bold(), line.value.dimmed()),
        };
        out.push(rendered);
    }

    out.join("\n")
}
