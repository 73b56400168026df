use indicatif::{ProgressBar, ProgressStyle};

const LINE_PROGRESS_TEMPLATE: &str = "{prefix:.bold} {bar:30.green/white} {pos}/{len} lines, eta {eta} {msg}";

/// Bar counting lines written to `device`. The message slot carries the line in flight.
pub(crate) fn line_progress_bar(total_lines: u64, device: String) -> ProgressBar {
    let style = ProgressStyle::with_template(LINE_PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");

    ProgressBar::new(total_lines)
        .with_style(style)
        .with_prefix(device)
}
