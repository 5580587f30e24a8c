//! Gallery error types

use thiserror::Error;

use super::catalog::ArtworkId;

/// Errors raised by the gallery view state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// No artwork with this id exists in the collection
    #[error("Artwork not found: {0}")]
    UnknownArtwork(ArtworkId),

    /// Category label is not one of the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Login or signup rejected because a field was left empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in all fields.")]
pub struct AuthError {
    /// Names of the empty fields
    pub missing: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::UnknownArtwork(9);
        assert_eq!(err.to_string(), "Artwork not found: 9");

        let err = AuthError { missing: vec!["password"] };
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }
}
