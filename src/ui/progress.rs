use colored::Colorize;
use std::io::{self, Write};
use terminal_size::{Width, terminal_size};

const FALLBACK_WIDTH: usize = 100;

fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Format `[label] line`, cut to fit `width` columns
pub fn format_line(label: &str, line: &str, width: usize) -> String {
    let prefix = format!("[{}] ", label);
    let budget = width.saturating_sub(prefix.chars().count() + 1);
    let body: String = if line.chars().count() > budget {
        let mut cut: String = line.chars().take(budget.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        line.to_string()
    };
    format!("{}{}", prefix, body)
}

/// Overwrite the current terminal line with the latest output of a package
///
/// Holds the stdout lock for the whole write so lines coming from the
/// stdout and stderr readers of one subprocess never interleave.
pub fn render_line(label: &str, line: &str) {
    let width = terminal_width();
    let text = format_line(label, line, width);
    let padding = width.saturating_sub(text.chars().count() + 1);

    let mut out = io::stdout().lock();
    // Use carriage return to overwrite the line
    let _ = write!(out, "\r{}{}", text.dimmed(), " ".repeat(padding));
    out.flush().unwrap_or(());
}

pub fn finish_line() {
    let mut out = io::stdout().lock();
    let _ = writeln!(out);
    out.flush().unwrap_or(());
}
