//! Partial interpretations of a query.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::TokenId;

/// A partial or complete candidate interpretation of the query.
///
/// Descriptions are values: extending one always goes through
/// [`SearchDescription::derive`], which returns an independent copy, so the
/// state a token was offered is never changed by the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDescription {
    /// Accumulated derivation cost.
    search_rank: u32,

    /// Searchable name tokens.
    name_tokens: Vec<TokenId>,

    /// Name tokens that may only be used for filtering.
    non_search_name_tokens: Vec<TokenId>,

    /// Searchable address tokens.
    address_tokens: Vec<TokenId>,

    /// Address tokens that may only be used for filtering.
    non_search_address_tokens: Vec<TokenId>,

    /// Set when the name was seeded by an infrequent word.
    rare_name: bool,

    /// Phrase that supplied the name.
    name_phrase: Option<usize>,

    /// Country restriction, if any.
    country_code: Option<String>,
}

fn push_unique(list: &mut Vec<TokenId>, id: TokenId) {
    if !list.contains(&id) {
        list.push(id);
    }
}

impl SearchDescription {
    /// Create an empty description with rank 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this description with `cost` added to its rank.
    pub fn derive(&self, cost: u32) -> Self {
        let mut search = self.clone();
        search.search_rank = search.search_rank.saturating_add(cost);
        search
    }

    /// Whether a name has been assigned.
    ///
    /// With `strict` set, name tokens that are not searchable count as well.
    pub fn has_name(&self, strict: bool) -> bool {
        !self.name_tokens.is_empty() || (strict && !self.non_search_name_tokens.is_empty())
    }

    /// Add a searchable name token coming from the phrase at `phrase_index`.
    pub fn add_name_token(&mut self, id: TokenId, phrase_index: usize) {
        push_unique(&mut self.name_tokens, id);
        self.name_phrase = Some(phrase_index);
    }

    /// Add a name token that restricts results but is not searched for.
    pub fn add_partial_name_token(&mut self, id: TokenId) {
        push_unique(&mut self.non_search_name_tokens, id);
    }

    pub fn add_address_token(&mut self, id: TokenId, searchable: bool) {
        if searchable {
            push_unique(&mut self.address_tokens, id);
        } else {
            push_unique(&mut self.non_search_address_tokens, id);
        }
    }

    pub fn mark_rare_name(&mut self) {
        self.rare_name = true;
    }

    pub fn set_country_code<S: Into<String>>(&mut self, code: S) {
        self.country_code = Some(code.into());
    }

    pub fn rank(&self) -> u32 {
        self.search_rank
    }

    pub fn is_rare_name(&self) -> bool {
        self.rare_name
    }

    pub fn name_tokens(&self) -> &[TokenId] {
        &self.name_tokens
    }

    pub fn non_search_name_tokens(&self) -> &[TokenId] {
        &self.non_search_name_tokens
    }

    pub fn address_tokens(&self) -> &[TokenId] {
        &self.address_tokens
    }

    pub fn non_search_address_tokens(&self) -> &[TokenId] {
        &self.non_search_address_tokens
    }

    pub fn name_phrase(&self) -> Option<usize> {
        self.name_phrase
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}

impl fmt::Display for SearchDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rank={} name={:?} address={:?}",
            self.search_rank, self.name_tokens, self.address_tokens
        )?;
        if self.rare_name {
            write!(f, " rare")?;
        }
        Ok(())
    }
}
