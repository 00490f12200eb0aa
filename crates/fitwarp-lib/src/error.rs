use std::path::PathBuf;

use thiserror::Error;

use crate::fit::FitId;

/// Convenient result alias for the fitwarp library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a caller-provided value is outside its accepted domain.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when the fit's attribute recalculation fails.
    #[error("attribute recalculation failed for fit {fit}: {message}")]
    Recalculation { fit: FitId, message: String },

    /// Raised when a fit has no ship to read attributes from.
    #[error("fit {fit} has no ship")]
    MissingShip { fit: FitId },

    /// Raised when the ship lacks a modified attribute after recalculation.
    #[error("fit {fit} ship is missing modified attribute {attribute}")]
    MissingAttribute { fit: FitId, attribute: String },

    /// Raised when a fit document fails validation.
    #[error("invalid fit data: {message}")]
    FitDataValidation { message: String },

    /// Raised when a fit document could not be read from disk.
    #[error("failed to read fit document {path}: {source}")]
    FitRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
