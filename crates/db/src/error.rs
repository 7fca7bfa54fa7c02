use veoflow_core::error::CoreError;

/// Failure of a repository write that checks domain rules before touching
/// the database.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The input broke a domain rule; no SQL was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
