//! Debug records for tracing tools.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::token::TokenId;

/// Structured description of a token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    #[serde(rename = "ID")]
    pub id: TokenId,

    /// Token kind, e.g. `word`.
    #[serde(rename = "Type")]
    pub kind: String,

    /// Kind-specific statistics.
    #[serde(rename = "Info")]
    pub info: Map<String, Value>,
}

impl DebugInfo {
    pub fn new<S: Into<String>>(id: TokenId, kind: S) -> Self {
        DebugInfo {
            id,
            kind: kind.into(),
            info: Map::new(),
        }
    }

    /// Add a kind-specific entry.
    pub fn with_info<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.info.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)?;
        for (key, value) in &self.info {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_layout() {
        let info = DebugInfo::new(3, "word")
            .with_info("count", 10)
            .with_info("terms", 2);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"ID": 3, "Type": "word", "Info": {"count": 10, "terms": 2}})
        );
    }

    #[test]
    fn test_display() {
        let info = DebugInfo::new(3, "word").with_info("count", 10);
        assert_eq!(info.to_string(), "word 3 count=10");
    }
}
