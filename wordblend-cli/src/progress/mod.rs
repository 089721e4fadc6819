//! Progress reporting module
//!
//! Implements the engine's [`ProgressObserver`] seam with indicatif bars:
//! one for blends generated (bounded when a budget is set, a counter
//! otherwise) and one for first words processed. Bars draw to stderr, so
//! blends streaming to stdout stay clean.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

use wordblend_core::ProgressObserver;

/// Progress reporter for a blend run
pub struct BlendProgress {
    blend_bar: Option<ProgressBar>,
    word_bar: Option<ProgressBar>,
}

impl BlendProgress {
    /// Create a reporter; disabled entirely in quiet mode
    pub fn new(quiet: bool, max_blends: usize, total_first_words: u64) -> Self {
        if quiet {
            return Self {
                blend_bar: None,
                word_bar: None,
            };
        }

        let multi = MultiProgress::new();

        let blend_bar = if max_blends > 0 {
            let pb = multi.add(ProgressBar::new(max_blends as u64));
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.green} {pos}/{len} blends {msg}")
                    .unwrap()
                    .progress_chars("##-"),
            );
            pb
        } else {
            let pb = multi.add(ProgressBar::no_length());
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("[{elapsed_precise}] {spinner} {pos} blends {msg}")
                    .unwrap(),
            );
            pb
        };
        blend_bar.enable_steady_tick(Duration::from_millis(100));

        let word_bar = multi.add(ProgressBar::new(total_first_words));
        word_bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} first words")
                .unwrap()
                .progress_chars("##-"),
        );

        Self {
            blend_bar: Some(blend_bar),
            word_bar: Some(word_bar),
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.blend_bar {
            pb.finish_with_message("done");
        }
        if let Some(pb) = &self.word_bar {
            pb.finish();
        }
    }
}

impl ProgressObserver for BlendProgress {
    fn blend_found(&self, blend: &str, total: usize) {
        if let Some(pb) = &self.blend_bar {
            pb.set_message(blend.to_string());
            pb.set_position(total as u64);
        }
    }

    fn first_word_done(&self, done: usize, _total: usize) {
        if let Some(pb) = &self.word_bar {
            pb.set_position(done as u64);
        }
    }
}
