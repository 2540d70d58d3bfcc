use thiserror::Error;

#[derive(Debug, Error)]
pub enum BibError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("duplicate citation key `{0}`")]
    DuplicateKey(String),
}

impl BibError {
    /// Parse-level error carrying the source line where it was detected.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BibError>;
