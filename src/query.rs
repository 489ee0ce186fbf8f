//! Query structure seen by the token extenders: phrases and token positions.

pub mod phrase;
pub mod position;

pub use self::phrase::{Phrase, PhraseType};
pub use self::position::TokenPosition;
