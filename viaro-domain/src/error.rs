use std::fmt::Display;

/// Failures crossing the store boundary. Driver errors are converted here
/// at the repository edge; nothing below this type leaks to callers and
/// nothing is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached. Fatal at session start.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A read or write against the store failed. Any open transaction is
    /// rolled back before this surfaces.
    #[error("store query failed: {0}")]
    Query(String),
}

impl StoreError {
    pub fn connection(err: impl Display) -> Self {
        StoreError::Connection(err.to_string())
    }

    pub fn query(err: impl Display) -> Self {
        StoreError::Query(err.to_string())
    }
}
