//! Portmanteau blend engine
//!
//! Given two word sequences, finds pairs whose tail/head substrings
//! overlap under Unicode case-insensitive comparison and fuses them into
//! new words ("revenge" + "vengeance" → "revengeance"), deduplicating
//! against the source vocabularies and against previously emitted blends.
//!
//! Comparison runs on case-folded strings; output is always built from
//! the original strings, with folded match positions mapped back through
//! [`casefold::map_folded_index`].
//!
//! ```
//! use wordblend_core::{BlendConfig, Blender, CancelToken, VocabularyPair, WordSequence};
//!
//! let vocab = VocabularyPair::new(
//!     WordSequence::from(vec!["revenge".to_string()]),
//!     WordSequence::from(vec!["vengeance".to_string()]),
//! );
//! let blender = Blender::new(BlendConfig::default());
//! let mut out = Vec::new();
//! let summary = blender
//!     .run(&vocab, &mut out, &CancelToken::new(), None)
//!     .unwrap();
//! assert_eq!(summary.blends, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "revengeance\n");
//! ```

#![warn(missing_docs)]

pub mod blend;
pub mod cancel;
pub mod casefold;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod progress;
pub mod vocabulary;

// Re-export key types
pub use blend::build_blend;
pub use cancel::CancelToken;
pub use config::{BlendConfig, BlendConfigBuilder, FilterOptions};
pub use engine::{Blender, RunSummary};
pub use error::{CoreError, Result};
pub use matcher::{find_overlap, Overlap};
pub use progress::ProgressObserver;
pub use vocabulary::{ExclusionSet, VocabularyPair, WordFilter, WordSequence, WordSet};
