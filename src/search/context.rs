//! Read-only parameters shared by every token extension of a run.

use serde::{Deserialize, Serialize};

/// Evaluation context passed into each `extend_search` call.
///
/// Build it once from a validated [`SearchConfig`](crate::config::SearchConfig)
/// and share it between threads; it is never modified afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    /// Words seen as a name fewer times than this mark a name as rare.
    /// `None` disables rarity marking.
    rare_name_threshold: Option<u32>,
}

impl SearchContext {
    /// Create a context. A threshold of zero disables rarity marking.
    pub fn new(rare_name_threshold: u32) -> Self {
        SearchContext {
            rare_name_threshold: (rare_name_threshold > 0).then_some(rare_name_threshold),
        }
    }

    /// Context with rarity marking disabled.
    pub fn without_rarity() -> Self {
        Self::default()
    }

    pub fn rare_name_threshold(&self) -> Option<u32> {
        self.rare_name_threshold
    }

    /// Whether a word with the given name frequency counts as rare.
    pub fn is_rare(&self, search_name_count: u32) -> bool {
        match self.rare_name_threshold {
            Some(threshold) => search_name_count < threshold,
            None => false,
        }
    }
}
