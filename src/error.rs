//! Error types shared by the glyph table, chord model, and layout importer.

use std::path::PathBuf;

/// Errors raised while reading a layout or translating it into glyphs.
#[derive(Debug)]
pub enum ChartError {
    /// Label has no entry in the glyph table
    LabelNotFound {
        /// The label that was looked up
        label: String,
    },
    /// Layout file is missing or could not be read
    FileAccess {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
    /// CSV record could not be decoded
    CsvParse {
        /// Underlying reader failure
        source: csv::Error,
    },
    /// A field requested from a layout row is missing or unusable
    MalformedRow {
        /// 1-based record number in the source file
        line: u64,
        /// 0-based field index that was accessed
        field: usize,
        /// What was wrong with it
        reason: String,
    },
    /// Finger-key alphabet cannot describe a chord space
    InvalidAlphabet {
        /// What was wrong with it
        reason: String,
    },
}

impl ChartError {
    /// Creates a `LabelNotFound` error.
    pub fn label_not_found(label: impl Into<String>) -> Self {
        Self::LabelNotFound {
            label: label.into(),
        }
    }

    /// Creates a `MalformedRow` error.
    pub fn malformed_row(line: u64, field: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            field,
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidAlphabet` error.
    pub fn invalid_alphabet(reason: impl Into<String>) -> Self {
        Self::InvalidAlphabet {
            reason: reason.into(),
        }
    }

    /// Returns true for failures caused by the environment rather than the data.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::CsvParse { .. })
    }
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LabelNotFound { label } => write!(f, "No glyph for label {label:?}"),
            Self::FileAccess { path, source } => {
                write!(f, "Cannot read layout file {}: {source}", path.display())
            }
            Self::CsvParse { source } => write!(f, "Invalid CSV record: {source}"),
            Self::MalformedRow {
                line,
                field,
                reason,
            } => write!(f, "[Row {line}, field {field}] {reason}"),
            Self::InvalidAlphabet { reason } => write!(f, "Invalid key alphabet: {reason}"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::CsvParse { source } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for ChartError {
    fn from(source: csv::Error) -> Self {
        Self::CsvParse { source }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_malformed_row() {
        let err = ChartError::malformed_row(3, 2, "missing field");
        assert_eq!(err.to_string(), "[Row 3, field 2] missing field");
    }

    #[test]
    fn test_file_access_is_io() {
        let err = ChartError::FileAccess {
            path: PathBuf::from("/nope.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_io());
        assert!(std::error::Error::source(&err).is_some());
        assert!(!ChartError::label_not_found("<Foo>").is_io());
    }
}
