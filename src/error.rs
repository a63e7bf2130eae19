// src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DockboxError>;

#[derive(Debug, Error)]
pub enum DockboxError {
    /// A coordinate, center, size or padding value that is not a real number.
    #[error("invalid numeric input: {value:?}")]
    InvalidNumericInput { value: String },

    /// Selection matched no atoms, so no extent exists.
    #[error("selection {selection:?} matched no atoms")]
    EmptySelection { selection: String },

    /// Malformed selection expression.
    #[error("bad selection: {message}")]
    Selection { message: String },

    /// Command line misuse (missing arguments or flag values).
    #[error("{0}")]
    Usage(String),

    /// Structure file could not be parsed.
    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parses a user-supplied string as f64, surfacing the offending value on
/// failure. Used wherever numbers cross the CLI boundary.
pub fn parse_f64(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DockboxError::InvalidNumericInput {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_numbers() {
        assert_eq!(parse_f64("5.0").unwrap(), 5.0);
        assert_eq!(parse_f64(" -3.25 ").unwrap(), -3.25);
        assert_eq!(parse_f64("1e2").unwrap(), 100.0);
    }

    #[test]
    fn rejects_non_numeric() {
        let err = parse_f64("abc").unwrap_err();
        match err {
            DockboxError::InvalidNumericInput { value } => assert_eq!(value, "abc"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
