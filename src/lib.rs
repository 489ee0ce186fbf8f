//! # geoquery
//!
//! Building blocks for interpreting geocoding queries.
//!
//! A tokenized query is interpreted by growing partial
//! [`SearchDescription`](search::SearchDescription)s one token at a time.
//! Each token kind decides whether, and how, it may extend a given partial
//! search at its position in the query.
//!
//! ## Features
//!
//! - Full word tokens classified as name or address parts
//! - Value-type search descriptions, safe to extend from many threads
//! - Parallel fan-out of candidate tokens
//! - JSON configuration with environment overrides
//!
//! ## Example
//!
//! ```
//! use geoquery::prelude::*;
//!
//! let ctx = SearchConfig::default().with_name_only_threshold(10).into_context();
//! let word = WordToken::new(5, 2, 1);
//! let position = TokenPosition::new(0, PhraseType::Default);
//!
//! let derived = word.extend_search(&SearchDescription::new(), &position, &ctx);
//! assert_eq!(derived.len(), 1);
//! assert_eq!(derived[0].name_tokens(), &[5]);
//! assert!(derived[0].is_rare_name());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod search;
pub mod token;

pub mod prelude {
    pub use crate::config::SearchConfig;
    pub use crate::error::{GeoQueryError, Result};
    pub use crate::query::{Phrase, PhraseType, TokenPosition};
    pub use crate::search::{SearchContext, SearchDescription, expand, expand_all};
    pub use crate::token::{DebugInfo, Token, TokenId, WordToken};
}
