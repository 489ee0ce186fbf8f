//! Search descriptions and their derivation from query tokens.

pub mod context;
pub mod description;
pub mod expansion;

pub use self::context::SearchContext;
pub use self::description::SearchDescription;
pub use self::expansion::{expand, expand_all};
