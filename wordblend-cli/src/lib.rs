//! Wordblend CLI library
//!
//! Glues the command-line surface to the blend engine: vocabulary
//! loading and cleaning, filter policy, output sink selection, progress
//! display, and Ctrl-C wiring.

use anyhow::Context;
use std::io::{self, IsTerminal};

use wordblend_core::{
    Blender, CancelToken, ExclusionSet, RunSummary, VocabularyPair, WordFilter, WordSet,
};

pub mod args;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use args::Args;
use progress::BlendProgress;

/// Run a full blend generation pass for the given arguments.
///
/// Cancellation via Ctrl-C is a normal exit: everything already written
/// stays written and the partial summary is returned.
pub fn run(args: &Args) -> CliResult<RunSummary> {
    let stdin_piped = !io::stdin().is_terminal();
    args.ensure_sources(stdin_piped)?;

    // The shared pool feeds both word positions; --w1/--w2 sources feed
    // only their own.
    let shared = if !args.input.is_empty() {
        input::load_words(&args.input)?
    } else if stdin_piped {
        input::load_from_reader(io::stdin().lock())?
    } else {
        WordSet::new()
    };
    let first_pool = shared.union(&input::load_words(&args.first_sources)?);
    let second_pool = shared.union(&input::load_words(&args.second_sources)?);

    let exclusions = match &args.exclude_overlaps {
        Some(path) => {
            let words = input::load_words(std::slice::from_ref(path))?;
            words.iter().collect::<ExclusionSet>()
        }
        None => ExclusionSet::default(),
    };

    let filter = WordFilter::new(args.filter_options());
    let vocab = VocabularyPair::new(filter.apply(&first_pool), filter.apply(&second_pool));

    log::info!(
        "{} words loaded, {} pairs to check",
        vocab.first.len() + vocab.second.len(),
        vocab.pair_count()
    );

    let blender = Blender::with_exclusions(args.blend_config()?, exclusions);

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install Ctrl-C handler")?;

    let progress = BlendProgress::new(args.quiet, args.number, vocab.first.len() as u64);
    let mut sink = output::open_sink(args.output.as_deref())?;
    let summary = blender.run(&vocab, &mut sink, &cancel, Some(&progress))?;
    progress.finish();

    if summary.cancelled {
        log::info!("cancelled after {} blends", summary.blends);
    } else {
        log::info!("{} blends generated", summary.blends);
    }

    Ok(summary)
}
