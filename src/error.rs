/// Errors that can occur when using clikit.
///
/// Errors are organized by category:
/// - Input errors: read failures on the byte source
/// - Print errors: encoding failures and bad encoding selectors
///
/// Clean exhaustion of a byte source is never an error; the input operations
/// report it as an empty result or a closed stream.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    // -------------------------------------------------------------------------
    // Input errors
    // -------------------------------------------------------------------------
    /// IO error while reading from the byte source.
    ///
    /// Covers every read failure other than clean exhaustion, such as a
    /// closed pipe or bytes that are not valid UTF-8.
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Print errors
    // -------------------------------------------------------------------------
    /// Failed to encode a value as JSON.
    #[error("failed to encode value as JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// Failed to encode a value as YAML.
    #[error("failed to encode value as YAML: {0}")]
    Yaml(#[source] serde_yml::Error),

    /// The encoding selector did not name a known encoding.
    #[error("unknown encoding {name:?}")]
    UnknownEncoding { name: String },

    /// The value cannot be laid out as a table.
    ///
    /// Table encoding needs a struct, a map, or a sequence; bare scalars
    /// have no columns to show.
    #[error("cannot print {kind} value as a table")]
    NotTabular { kind: &'static str },
}

/// A specialized Result type for clikit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io(source)
    }

    /// Check if this error came from reading the byte source.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<serde_yml::Error> for Error {
    fn from(err: serde_yml::Error) -> Self {
        Error::Yaml(err)
    }
}
