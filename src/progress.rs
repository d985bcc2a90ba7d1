//! Progress bar display for the project-copy build step

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for copying the project tree into an image
pub struct CopyProgress {
    bar: ProgressBar,
}

impl CopyProgress {
    /// Create a progress bar over the total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_files);
        bar.set_style(style);

        Self { bar }
    }

    /// Record one copied file
    pub fn update(&self, file_path: &str) {
        self.bar.set_message(truncate_path(file_path));
        self.bar.inc(1);
    }

    /// Finish and clear the bar so the step summary line replaces it
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

/// Truncate a long path for display, keeping its tail
///
/// Counts characters, not bytes, so multi-byte file names never split
/// mid-character.
fn truncate_path(file_path: &str) -> String {
    const MAX_CHARS: usize = 50;
    const TAIL_CHARS: usize = 47;

    let total = file_path.chars().count();
    if total <= MAX_CHARS {
        return file_path.to_string();
    }

    let tail: String = file_path.chars().skip(total - TAIL_CHARS).collect();
    format!("...{tail}")
}
