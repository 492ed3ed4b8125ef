//! Crate-level error types.

use std::fmt;

/// Errors produced by the dockwave crate.
///
/// Only the configuration I/O surface can fail; animation math never
/// surfaces an error and instead degrades to holding the last good frame.
#[derive(Debug)]
pub enum DockwaveError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for DockwaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for DockwaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for DockwaveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_source_message() {
        let err = DockwaveError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");

        let io = DockwaveError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(io.to_string().contains("missing"));
    }
}
