//! Error types for material lookup and weight conversion.

use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors from the material registry and weight conversions.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MaterialError {
    /// The id does not name a registered material.
    #[error("unknown material {id:?}")]
    UnknownMaterial {
        /// The id that was looked up.
        id: String,
    },

    /// The volume is negative, NaN, or infinite.
    #[error("invalid volume {volume}: must be finite and non-negative")]
    InvalidVolume {
        /// The rejected volume in mm³.
        volume: f64,
    },
}

impl MaterialError {
    /// Create an `UnknownMaterial` error for the given id.
    #[must_use]
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownMaterial { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaterialError::unknown("Unobtainium");
        assert_eq!(err.to_string(), "unknown material \"Unobtainium\"");

        let err = MaterialError::InvalidVolume { volume: -1.0 };
        assert!(err.to_string().contains("-1"));
    }
}
