//! Full word tokens.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::query::phrase::PhraseType;
use crate::query::position::TokenPosition;
use crate::search::context::SearchContext;
use crate::search::description::SearchDescription;
use crate::token::debug::DebugInfo;
use crate::token::{Token, TokenId};

/// Cost of adding a full word to a search.
const WORD_COST: u32 = 1;

/// A full word from the vocabulary.
///
/// A word may stand for several terms of the query (e.g. "new york").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordToken {
    id: TokenId,
    /// How often the word was seen as part of a name.
    search_name_count: u32,
    /// Number of query terms the word covers.
    term_count: u32,
}

impl WordToken {
    pub fn new(id: TokenId, search_name_count: u32, term_count: u32) -> Self {
        WordToken {
            id,
            search_name_count,
            term_count,
        }
    }

    pub fn search_name_count(&self) -> u32 {
        self.search_name_count
    }

    pub fn term_count(&self) -> u32 {
        self.term_count
    }
}

impl Token for WordToken {
    fn id(&self) -> TokenId {
        self.id
    }

    fn extend_search(
        &self,
        search: &SearchDescription,
        position: &TokenPosition,
        ctx: &SearchContext,
    ) -> Vec<SearchDescription> {
        if position.is_phrase(PhraseType::Country) {
            return Vec::new();
        }

        // Full words can only start a name at the beginning of the query.
        // Structured queries need the name in the first phrase; free-form
        // queries may have it later, e.g. after a house number phrase.
        let name_position = position.is_first_phrase() || position.is_phrase(PhraseType::Default);

        if search.has_name(false) || !name_position {
            if self.term_count > 1
                && (position.is_phrase(PhraseType::Default) || !position.is_first_phrase())
            {
                let mut new_search = search.derive(WORD_COST);
                new_search.add_address_token(self.id, true);
                trace!("word {} extends search as address: {}", self.id, new_search);
                return vec![new_search];
            }
        } else if !search.has_name(true) {
            let mut new_search = search.derive(WORD_COST);
            new_search.add_name_token(self.id, position.phrase_index);
            if ctx.is_rare(self.search_name_count) {
                new_search.mark_rare_name();
            }
            trace!("word {} extends search as name: {}", self.id, new_search);
            return vec![new_search];
        }

        trace!("word {} cannot extend search in phrase {}", self.id, position.phrase_index);
        Vec::new()
    }

    fn debug_info(&self) -> DebugInfo {
        DebugInfo::new(self.id, "word")
            .with_info("count", self.search_name_count)
            .with_info("terms", self.term_count)
    }

    fn debug_code(&self) -> char {
        'W'
    }
}
