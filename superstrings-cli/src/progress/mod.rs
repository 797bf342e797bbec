//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a solver runs
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }

    /// Start the spinner for a solver run over `words` words
    pub fn start(&mut self, solver: &str, words: usize) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("[{elapsed_precise}] {spinner} {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(format!("Running {solver} solver on {words} words"));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(pb);
    }

    /// Stop and clear the spinner
    pub fn finish(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
