//! Error types and handling infrastructure for JSON rewriting

use std::fmt;
use std::path::{Path, PathBuf};

/// Core error kinds for the rewrite process
#[derive(Debug, thiserror::Error)]
pub enum RewriteErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("JSON serialization error: {message}")]
    Serialize {
        message: String,
        path: Option<PathBuf>,
    },
}

impl RewriteErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn serialize(message: String, path: Option<PathBuf>) -> Self {
        Self::Serialize { message, path }
    }

    fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Serialize { path, .. } => path.as_deref(),
            Self::NotADirectory { path } => Some(path),
            Self::Configuration { .. } => None,
        }
    }
}

/// Main error type for rewrite operations
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Rewrite {
        kind: RewriteErrorKind,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl RewriteError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn rewrite(kind: RewriteErrorKind) -> Self {
        Self::Rewrite { kind, source: None }
    }

    /// Wrap an I/O failure on `path`, keeping the original error as the source
    pub fn io(error: std::io::Error, path: &Path) -> Self {
        Self::Rewrite {
            kind: RewriteErrorKind::io(error.to_string(), Some(path.to_path_buf())),
            source: Some(error),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::rewrite(RewriteErrorKind::configuration(message.into()))
    }

    /// The file or directory the error relates to, if known
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ParseError(err) => err.path.as_deref(),
            Self::Rewrite { kind, .. } => kind.path(),
        }
    }

    /// Whether the error came from malformed JSON input
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                let prefix = match &err.path {
                    Some(path) => format!("{}: ", path.display()),
                    None => String::new(),
                };
                if let Some((line, col)) = err.location {
                    format!(
                        "{}JSON parse error at line {}, column {}: {}",
                        prefix, line, col, err.message
                    )
                } else {
                    format!("{}JSON parse error: {}", prefix, err.message)
                }
            }
            Self::Rewrite { kind, .. } => match kind {
                RewriteErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("{}: {}", path.display(), message),
                RewriteErrorKind::Serialize {
                    message,
                    path: Some(path),
                } => format!("{}: failed to serialize JSON: {}", path.display(), message),
                _ => kind.to_string(),
            },
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
