//! Location of a token within the query.

use serde::{Deserialize, Serialize};

use crate::query::phrase::PhraseType;

/// Read-only description of where a token sits in the query.
///
/// A position belongs to exactly one phrase, which has exactly one type
/// and one index. Neither changes while searches are being extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPosition {
    /// Index of the enclosing phrase (0-based).
    pub phrase_index: usize,

    /// Number of phrases in the query.
    pub phrase_count: usize,

    /// Type of the enclosing phrase.
    pub phrase_type: PhraseType,

    /// Index of the token's first term within the phrase (0-based).
    pub token_index: usize,

    /// Number of terms in the phrase.
    pub token_count: usize,
}

impl TokenPosition {
    /// Create a position in the phrase at `phrase_index`.
    ///
    /// Phrase and token counts default to the smallest values consistent
    /// with the index.
    pub fn new(phrase_index: usize, phrase_type: PhraseType) -> Self {
        TokenPosition {
            phrase_index,
            phrase_count: phrase_index.saturating_add(1),
            phrase_type,
            token_index: 0,
            token_count: 1,
        }
    }

    /// Set the number of phrases in the query.
    pub fn with_phrase_count(mut self, count: usize) -> Self {
        self.phrase_count = count.max(self.phrase_index.saturating_add(1));
        self
    }

    /// Set the token's index within its phrase and the phrase length.
    pub fn with_token(mut self, index: usize, count: usize) -> Self {
        self.token_index = index;
        self.token_count = count.max(index.saturating_add(1));
        self
    }

    /// True if the enclosing phrase has the given type.
    ///
    /// `PhraseType::Default` matches untyped phrases.
    pub fn is_phrase(&self, phrase_type: PhraseType) -> bool {
        self.phrase_type == phrase_type
    }

    pub fn is_first_phrase(&self) -> bool {
        self.phrase_index == 0
    }

    pub fn is_last_phrase(&self) -> bool {
        self.phrase_index.saturating_add(1) == self.phrase_count
    }

    pub fn is_first_token(&self) -> bool {
        self.token_index == 0
    }

    pub fn is_last_token(&self) -> bool {
        self.token_index.saturating_add(1) == self.token_count
    }
}
