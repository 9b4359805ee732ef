//! Error types for DermaFeat

use thiserror::Error;

/// Main error type for DermaFeat operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Grid size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch {
        er: usize,
        ec: usize,
        ar: usize,
        ac: usize,
    },

    #[error("Degenerate mask: zero lesion area")]
    DegenerateMask,

    #[error("No contour found in thresholded input")]
    NoContour,

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{analyzer} analyzer failed: {source}")]
    Analyzer {
        analyzer: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Tag an error with the analyzer it escaped from.
    pub fn in_analyzer(self, analyzer: &'static str) -> Self {
        Error::Analyzer {
            analyzer,
            source: Box::new(self),
        }
    }

    /// The innermost error kind, unwrapping analyzer tags.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Analyzer { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for DermaFeat operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_tag_preserves_cause() {
        let err = Error::DegenerateMask.in_analyzer("symmetry");
        assert!(matches!(err, Error::Analyzer { analyzer: "symmetry", .. }));
        assert!(matches!(err.root_cause(), Error::DegenerateMask));
    }

    #[test]
    fn test_display_names_analyzer() {
        let err = Error::NoContour.in_analyzer("compactness");
        let text = err.to_string();
        assert!(text.contains("compactness"));
    }
}
