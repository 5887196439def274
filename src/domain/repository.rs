use async_trait::async_trait;

use super::error::TodoResult;
use super::todo::{Todo, TodoId, TodoInput};
use super::user::User;

/// Storage port for users and the todo lists they own.
///
/// Every todo method resolves the user by `username` first and reports
/// [`TodoError::UserNotFound`](super::error::TodoError::UserNotFound) before
/// looking at the todo id. Each call is atomic with respect to the others.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Store a new user, rejecting a username that is already taken.
    async fn create_user(&self, user: User) -> TodoResult<User>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
    async fn list_todos(&self, username: &str) -> TodoResult<Vec<Todo>>;
    async fn append_todo(&self, username: &str, todo: Todo) -> TodoResult<Todo>;
    /// Overwrite title and deadline; `done`, `id` and `created_at` are kept.
    async fn edit_todo(&self, username: &str, id: TodoId, input: TodoInput) -> TodoResult<Todo>;
    async fn complete_todo(&self, username: &str, id: TodoId) -> TodoResult<Todo>;
    async fn delete_todo(&self, username: &str, id: TodoId) -> TodoResult<()>;
}
