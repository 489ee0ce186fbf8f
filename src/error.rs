//! Error types for the geoquery library.
//!
//! Token extension itself never fails: a token that cannot extend a search
//! simply yields no derived descriptions. Errors only arise at the edges,
//! when configuration is loaded or query descriptors are parsed.
//!
//! # Examples
//!
//! ```
//! use geoquery::error::{GeoQueryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GeoQueryError::config("threshold is not a number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for geoquery operations.
#[derive(Error, Debug)]
pub enum GeoQueryError {
    /// I/O errors (reading configuration files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid values, unparseable overrides)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query descriptor errors (unknown phrase types)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with GeoQueryError.
pub type Result<T> = std::result::Result<T, GeoQueryError>;

impl GeoQueryError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GeoQueryError::Config(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        GeoQueryError::Query(msg.into())
    }
}
