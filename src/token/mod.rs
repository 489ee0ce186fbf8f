//! Query tokens and the capability surface shared by all token kinds.
//!
//! Every token kind (full words, house numbers, postcodes, ...) derives new
//! search descriptions from a partial one through the same [`Token`] trait,
//! so the search driver can treat candidates uniformly.

pub mod debug;
pub mod word;

use std::fmt::Debug;

use crate::query::position::TokenPosition;
use crate::search::context::SearchContext;
use crate::search::description::SearchDescription;

pub use self::debug::DebugInfo;
pub use self::word::WordToken;

/// Identifier of a vocabulary entry.
pub type TokenId = u64;

/// Trait implemented by every token kind.
///
/// Implementations must be pure: `extend_search` only reads its inputs and
/// returns freshly derived descriptions. This is what allows candidates to
/// be evaluated in parallel.
pub trait Token: Send + Sync + Debug {
    /// Vocabulary id of the token.
    fn id(&self) -> TokenId;

    /// Derive new searches by adding this token to `search`.
    ///
    /// Returns an empty vector when the token cannot extend the search at
    /// this position.
    fn extend_search(
        &self,
        search: &SearchDescription,
        position: &TokenPosition,
        ctx: &SearchContext,
    ) -> Vec<SearchDescription>;

    /// Structured description for tracing tools.
    fn debug_info(&self) -> DebugInfo;

    /// Single character identifying the token kind in compact traces.
    fn debug_code(&self) -> char;
}
