use thiserror::Error;

/// Errors raised by collection operations.
///
/// All errors are synchronous and raised at the point of detection; a failed
/// call leaves no partial state behind (operations build new values rather
/// than mutating their input).
#[derive(Debug, Error)]
pub enum CollectionError {
    /// An enum-like parameter was outside its closed set (search kind,
    /// field format, digest algorithm name), or an operation received an
    /// empty input it rejects.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input had a structurally wrong shape, e.g. a nested element where
    /// a flat collection was required, or a scalar first row where a record
    /// batch was required.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// A referenced key or field name was absent.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A row's field count disagreed with the header row's.
    #[error("row {key} has {actual} fields, header has {expected}")]
    SizeMismatch {
        key: String,
        actual: usize,
        expected: usize,
    },

    /// The write destination exists and overwriting was not permitted.
    #[error("destination already exists: {0}")]
    AlreadyExists(String),

    /// An I/O failure while writing a delimited destination.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
