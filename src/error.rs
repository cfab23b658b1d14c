use std::path::PathBuf;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while reading themes, parsing INI documents,
/// or persisting settings.
///
/// Theme resolution itself never fails with one of these: a theme
/// that cannot be resolved is simply `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme name that can't safely be used as a directory name.
    #[error("invalid theme name '{name}': {reason}")]
    InvalidThemeName { name: String, reason: &'static str },

    /// An INI document (index.theme, defaults, config file) has a line
    /// that is neither a header, an entry nor a comment.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A look-and-feel package directory without package contents.
    #[error("'{0}' is not a look-and-feel package")]
    InvalidPackage(PathBuf),

    /// The live cursor notification backend rejected a request.
    #[error("cursor notifier error: {0}")]
    Notifier(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a theme name error.
    pub fn invalid_theme_name(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidThemeName {
            name: name.into(),
            reason,
        }
    }
}
