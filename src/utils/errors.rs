use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        file: Option<PathBuf>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StrataError {
    /// Create a simple parse error without file context
    pub fn parse(message: String) -> Self {
        Self::Parse {
            message,
            file: None,
        }
    }

    /// Create a parse error pointing at a specific file
    pub fn parse_in_file(message: String, file: PathBuf) -> Self {
        Self::Parse {
            message,
            file: Some(file),
        }
    }

    /// Create a configuration error
    pub fn config(message: String) -> Self {
        Self::Config(message)
    }

    /// Format error with file context when present
    pub fn format_detailed(&self) -> String {
        match self {
            StrataError::Parse {
                message,
                file: Some(path),
            } => {
                format!("❌ Parse Error: {}\n📁 File: {}", message, path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StrataError>;

impl From<regex::Error> for StrataError {
    fn from(err: regex::Error) -> Self {
        StrataError::parse(format!("Regex error: {}", err))
    }
}
