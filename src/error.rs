//! Error taxonomy for deck generation, layout, and export.
//!
//! Caller mistakes (`InvalidOrder`, `LengthMismatch`, `InvalidConfig`) and
//! the `InsufficientAssets` precondition block further processing. A symbol
//! that free packing cannot place is not an error: it is reported through
//! [`PackingOutcome::dropped`](crate::layout::PackingOutcome).

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum SpotError {
    /// Deck order outside the generator's domain (`n < 2`).
    #[error("deck order must be at least 2, got {n}")]
    InvalidOrder { n: usize },

    /// Fewer symbol assets than the deck needs.
    #[error("upload at least {required} images to generate the cards (got {supplied})")]
    InsufficientAssets { required: usize, supplied: usize },

    /// A deterministic layout parameter sequence does not match the symbol count.
    #[error("{field} has {actual} entries but the card has {expected} symbols")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Configuration or override value rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("card index {index} out of range for a deck of {len} cards")]
    CardOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SpotError::InsufficientAssets {
            required: 13,
            supplied: 4,
        };
        assert_eq!(
            err.to_string(),
            "upload at least 13 images to generate the cards (got 4)"
        );

        let err = SpotError::LengthMismatch {
            field: "sizes",
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "sizes has 3 entries but the card has 4 symbols");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SpotError = io.into();
        assert!(matches!(err, SpotError::Io(_)));
    }
}
