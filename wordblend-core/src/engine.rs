//! Blend stream controller
//!
//! Drives the pairwise scan over a vocabulary pair, deduplicates, and
//! streams every accepted blend to the output sink as it is found.
//! Streaming (rather than collecting) bounds memory on large vocabularies
//! and lets cancellation keep everything already written.

use std::collections::HashSet;
use std::io::Write;

use log::{debug, trace};

use crate::blend::build_blend;
use crate::cancel::CancelToken;
use crate::casefold::fold;
use crate::config::BlendConfig;
use crate::error::Result;
use crate::matcher::find_overlap;
use crate::progress::ProgressObserver;
use crate::vocabulary::{ExclusionSet, VocabularyPair};

/// Outcome of a blend run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Blends accepted and written to the sink
    pub blends: usize,
    /// Outer-loop words fully scanned
    pub first_words_scanned: usize,
    /// Whether the run ended via the cancellation token
    pub cancelled: bool,
}

/// The blend engine: configuration plus the overlaps to never accept
#[derive(Debug, Clone, Default)]
pub struct Blender {
    config: BlendConfig,
    exclusions: ExclusionSet,
}

impl Blender {
    /// Create an engine with an empty exclusion set
    pub fn new(config: BlendConfig) -> Self {
        Self::with_exclusions(config, ExclusionSet::default())
    }

    /// Create an engine with an operator-supplied exclusion set
    pub fn with_exclusions(config: BlendConfig, exclusions: ExclusionSet) -> Self {
        Self { config, exclusions }
    }

    /// The engine's configuration
    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Scan every `(w0, w1)` pair of `vocab` in sequence order, writing
    /// accepted blends to `sink` one per line as they are discovered.
    ///
    /// A blend is accepted iff it is not an exact member of either source
    /// sequence, its case-folded form does not collide with any source
    /// word's case-folded form, and it has not already been emitted this
    /// run. The scan stops when `max_blends` is reached (if nonzero), the
    /// outer sequence is exhausted, or `cancel` is tripped; cancellation
    /// is a normal exit with the partial count, not an error.
    pub fn run<W: Write>(
        &self,
        vocab: &VocabularyPair,
        sink: &mut W,
        cancel: &CancelToken,
        observer: Option<&dyn ProgressObserver>,
    ) -> Result<RunSummary> {
        let sources: HashSet<&str> = vocab.first.iter().chain(vocab.second.iter()).collect();
        let folded_sources: HashSet<String> = sources.iter().map(|w| fold(w)).collect();
        let mut emitted: HashSet<String> = HashSet::new();

        let max_blends = self.config.max_blends;
        let mut summary = RunSummary::default();

        debug!(
            "scanning {} pairs ({} x {} words)",
            vocab.pair_count(),
            vocab.first.len(),
            vocab.second.len()
        );

        'scan: for w0 in vocab.first.iter() {
            if cancel.is_cancelled() {
                summary.cancelled = true;
                break 'scan;
            }

            for w1 in vocab.second.iter() {
                let Some(overlap) = find_overlap(
                    w0,
                    w1,
                    self.config.min_depth,
                    self.config.min_free,
                    &self.exclusions,
                ) else {
                    continue;
                };

                let blend = build_blend(w0, w1, overlap, self.config.uppercase_overlap);

                if sources.contains(blend.as_str()) || folded_sources.contains(&fold(&blend)) {
                    trace!("blend {blend:?} collides with a source word");
                    continue;
                }
                if emitted.contains(&blend) {
                    continue;
                }

                writeln!(sink, "{blend}")?;
                summary.blends += 1;
                debug!(
                    "blend {:?} = {:?} + {:?} (start {}, depth {})",
                    blend, w0, w1, overlap.start, overlap.depth
                );
                if let Some(observer) = observer {
                    observer.blend_found(&blend, summary.blends);
                }
                emitted.insert(blend);

                if max_blends > 0 && summary.blends >= max_blends {
                    break 'scan;
                }
            }

            summary.first_words_scanned += 1;
            if let Some(observer) = observer {
                observer.first_word_done(summary.first_words_scanned, vocab.first.len());
            }
        }

        // Every exit path, cancellation included, leaves the sink flushed.
        sink.flush()?;

        debug!(
            "run finished: {} blends, {} first words scanned, cancelled: {}",
            summary.blends, summary.first_words_scanned, summary.cancelled
        );
        Ok(summary)
    }
}
