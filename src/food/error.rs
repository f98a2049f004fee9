use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodError {
    #[error("Collaborator not configured: {0}")]
    CollaboratorUnavailable(String),
    #[error("Collaborator request failed: {0}")]
    CollaboratorFailure(String),
    #[error("Malformed collaborator response: {0}")]
    MalformedCollaboratorResponse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FoodError {
    /// Errors the resolution chain absorbs by moving on to the next tier.
    pub fn is_collaborator_error(&self) -> bool {
        matches!(
            self,
            FoodError::CollaboratorUnavailable(_)
                | FoodError::CollaboratorFailure(_)
                | FoodError::MalformedCollaboratorResponse(_)
        )
    }
}

pub type FoodResult<T> = Result<T, FoodError>;
