use thiserror::Error;

/// Failure of the remote atomic update.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StoreError {
    /// The store could not be reached or rejected the request
    /// (connectivity, throttling, missing permissions, table not found).
    #[error("store request failed: {reason}")]
    RequestFailed {
        reason: String,
    },

    /// The store reported success but did not return the updated attribute.
    #[error("store response is missing updated attribute: {attribute}")]
    MissingAttribute {
        attribute: String,
    },

    /// The returned attribute is not an unsigned integer.
    #[error("store returned value that is not a counter: {value}")]
    InvalidValue {
        value: String,
    },
}

/// Error that may be returned when the counter handler is invoked.
/// Nothing is retried locally, the hosting runtime decides what the caller sees.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum HandlerError {
    #[error("store operation failed: {0}")]
    StoreOperationFailed(#[from] StoreError),
}
