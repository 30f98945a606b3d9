//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! fallible operations; these errors come from fetching and printing.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the fetch layer and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Remote resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote answered with any other non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing REPL output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let not_found = PokedexError::NotFound("https://pokeapi.co/api/v2/pokemon/x/".to_string());
        assert_eq!(
            not_found.to_string(),
            "Not found: https://pokeapi.co/api/v2/pokemon/x/"
        );

        let status = PokedexError::Status {
            url: "http://localhost/".to_string(),
            status: 500,
        };
        assert_eq!(status.to_string(), "Unexpected status 500 from http://localhost/");
    }

    #[test]
    fn test_decode_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PokedexError = err.into();
        assert!(matches!(err, PokedexError::Decode(_)));
    }
}
