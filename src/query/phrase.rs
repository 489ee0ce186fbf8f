//! Phrases of a tokenized query and their semantic types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeoQueryError, Result};
use crate::query::position::TokenPosition;

/// Semantic type of a phrase.
///
/// Free-form queries produce untyped phrases only. Structured queries
/// (separate street, city, country, ... inputs) tag each phrase with the
/// field it came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseType {
    /// Untyped phrase of a free-form query.
    #[default]
    Default,
    Amenity,
    Street,
    City,
    County,
    State,
    Postcode,
    Country,
}

impl PhraseType {
    /// Lowercase name of the phrase type, empty for the untyped phrase.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseType::Default => "",
            PhraseType::Amenity => "amenity",
            PhraseType::Street => "street",
            PhraseType::City => "city",
            PhraseType::County => "county",
            PhraseType::State => "state",
            PhraseType::Postcode => "postcode",
            PhraseType::Country => "country",
        }
    }

    /// Whether this is the untyped phrase of a free-form query.
    pub fn is_default(&self) -> bool {
        *self == PhraseType::Default
    }
}

impl fmt::Display for PhraseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            write!(f, "default")
        } else {
            write!(f, "{}", self.as_str())
        }
    }
}

impl FromStr for PhraseType {
    type Err = GeoQueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(PhraseType::Default),
            "amenity" => Ok(PhraseType::Amenity),
            "street" => Ok(PhraseType::Street),
            "city" => Ok(PhraseType::City),
            "county" => Ok(PhraseType::County),
            "state" => Ok(PhraseType::State),
            "postcode" | "postalcode" => Ok(PhraseType::Postcode),
            "country" => Ok(PhraseType::Country),
            other => Err(GeoQueryError::query(format!(
                "unknown phrase type '{other}'"
            ))),
        }
    }
}

/// A contiguous segment of the query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    /// The phrase text as entered.
    pub text: String,
    /// Semantic type of the phrase.
    pub phrase_type: PhraseType,
}

impl Phrase {
    /// Create an untyped phrase.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Phrase {
            text: text.into(),
            phrase_type: PhraseType::Default,
        }
    }

    /// Create a phrase with the given type.
    pub fn typed<S: Into<String>>(text: S, phrase_type: PhraseType) -> Self {
        Phrase {
            text: text.into(),
            phrase_type,
        }
    }

    /// Position descriptor for a token in this phrase, which sits at
    /// `index` among `count` phrases of the query.
    pub fn position_of(&self, index: usize, count: usize) -> TokenPosition {
        TokenPosition::new(index, self.phrase_type).with_phrase_count(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_type_parsing() {
        assert_eq!("".parse::<PhraseType>().unwrap(), PhraseType::Default);
        assert_eq!("default".parse::<PhraseType>().unwrap(), PhraseType::Default);
        assert_eq!("Country".parse::<PhraseType>().unwrap(), PhraseType::Country);
        assert_eq!(
            "postalcode".parse::<PhraseType>().unwrap(),
            PhraseType::Postcode
        );

        let err = "planet".parse::<PhraseType>().unwrap_err();
        assert_eq!(err.to_string(), "Query error: unknown phrase type 'planet'");
    }

    #[test]
    fn test_phrase_type_display() {
        assert_eq!(PhraseType::Default.to_string(), "default");
        assert_eq!(PhraseType::Default.as_str(), "");
        assert_eq!(PhraseType::Street.to_string(), "street");
    }

    #[test]
    fn test_phrase_position() {
        let phrases = vec![
            Phrase::typed("Hauptstr 5", PhraseType::Street),
            Phrase::typed("Germany", PhraseType::Country),
        ];

        let first = phrases[0].position_of(0, phrases.len());
        assert!(first.is_first_phrase());
        assert!(first.is_phrase(PhraseType::Street));

        let last = phrases[1].position_of(1, phrases.len());
        assert!(last.is_last_phrase());
        assert!(last.is_phrase(PhraseType::Country));
    }
}
