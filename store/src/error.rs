use thiserror::Error;

/// Failures surfaced by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A submission was rejected before anything was written.
    #[error("invalid product: {0}")]
    Validation(String),
    /// Another record already uses the submitted name.
    #[error("a product named \"{0}\" already exists")]
    DuplicateName(String),
    /// The backend failed to persist a write.
    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),
}
