//! Parallel fan-out of candidate tokens over search descriptions.
//!
//! This is one transition step of the search: every candidate token at a
//! position is offered every current description, and all derived
//! descriptions are collected. Ordering, pruning and termination of the
//! overall search belong to the caller.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::query::position::TokenPosition;
use crate::search::context::SearchContext;
use crate::search::description::SearchDescription;
use crate::token::Token;

/// Offer each token to `search`, returning all derived descriptions.
///
/// Results keep token order regardless of how work is scheduled.
pub fn expand(
    search: &SearchDescription,
    position: &TokenPosition,
    tokens: &[Arc<dyn Token>],
    ctx: &SearchContext,
) -> Vec<SearchDescription> {
    let derived: Vec<SearchDescription> = tokens
        .par_iter()
        .flat_map_iter(|token| token.extend_search(search, position, ctx))
        .collect();

    debug!(
        "{} tokens produced {} searches in phrase {}",
        tokens.len(),
        derived.len(),
        position.phrase_index
    );
    derived
}

/// Offer each token to each of `searches`.
///
/// Results are grouped by input search, then by token.
pub fn expand_all(
    searches: &[SearchDescription],
    position: &TokenPosition,
    tokens: &[Arc<dyn Token>],
    ctx: &SearchContext,
) -> Vec<SearchDescription> {
    searches
        .par_iter()
        .flat_map_iter(|search| {
            tokens
                .iter()
                .flat_map(move |token| token.extend_search(search, position, ctx))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::phrase::PhraseType;
    use crate::token::word::WordToken;

    fn tokens() -> Vec<Arc<dyn Token>> {
        vec![
            Arc::new(WordToken::new(1, 5, 1)),
            Arc::new(WordToken::new(2, 900, 2)),
            Arc::new(WordToken::new(3, 900, 1)),
        ]
    }

    #[test]
    fn test_expand_empty_search() {
        let position = TokenPosition::new(0, PhraseType::Default);
        let results = expand(
            &SearchDescription::new(),
            &position,
            &tokens(),
            &SearchContext::new(10),
        );

        let names: Vec<_> = results.iter().map(|s| s.name_tokens().to_vec()).collect();
        assert_eq!(names, vec![vec![1], vec![2], vec![3]]);
        assert!(results[0].is_rare_name());
        assert!(!results[1].is_rare_name());
    }

    #[test]
    fn test_expand_all_keeps_grouping() {
        let mut named = SearchDescription::new();
        named.add_name_token(10, 0);
        let searches = vec![SearchDescription::new(), named];
        let position = TokenPosition::new(1, PhraseType::Default);

        let results = expand_all(&searches, &position, &tokens(), &SearchContext::new(10));

        // The empty search accepts every word as name, the named search only
        // accepts the multi-term word as address.
        assert_eq!(results.len(), 4);
        assert_eq!(results[3].name_tokens(), &[10]);
        assert_eq!(results[3].address_tokens(), &[2]);
    }

    #[test]
    fn test_expand_no_tokens() {
        let position = TokenPosition::new(0, PhraseType::Default);
        let results = expand(&SearchDescription::new(), &position, &[], &SearchContext::default());
        assert!(results.is_empty());
    }
}
