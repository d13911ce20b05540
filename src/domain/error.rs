use std::io;

use thiserror::Error;

/// Library-wide error type for ktjar operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or argument issue.
    #[error("{0}")]
    Configuration(String),

    /// Descriptor or entry-point template failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// External scaffolding tool exited nonzero.
    #[error("'{command}' exited with status {status}; captured output:\n{output}")]
    ExternalTool { command: String, status: i32, output: String },

    /// Template archive download failed.
    #[error("Download failed (code {code}): {message}")]
    Download { code: i32, message: String },

    /// Template archive cannot be decoded.
    #[error("Malformed archive: {0}")]
    MalformedArchive(String),

    /// Archive entry would escape the extraction root.
    #[error("Archive entry '{0}' escapes the extraction root")]
    UnsafeArchivePath(String),

    /// Generated source tree did not match the expected shape.
    #[error("Expected exactly one generated source file in {}, found: [{}]", .dir, .found.join(", "))]
    UnexpectedScaffold { dir: String, found: Vec<String> },
}

impl AppError {
    pub(crate) fn template<S: Into<String>>(message: S) -> Self {
        AppError::Template(message.into())
    }
}
