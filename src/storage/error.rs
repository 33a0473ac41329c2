use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record store is disconnected")]
    Disconnected,

    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Record store lock poisoned")]
    Poisoned,
}
