use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Parameters name and username is required!")]
    Validation,
    #[error("User already exists.")]
    Conflict,
    #[error("User does not exist.")]
    UserNotFound,
    #[error("Todo does not exist.")]
    TodoNotFound,
}

pub type TodoResult<T> = Result<T, TodoError>;
