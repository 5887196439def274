use crate::domain::error::{TodoError, TodoResult};
use crate::domain::id::{IdGenerator, RandomIds};
use crate::domain::repository::UserRepository;
use crate::domain::todo::{EditedTodo, Todo, TodoId, TodoInput};
use crate::domain::user::{NewUser, Registration, User, UserId};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

/// Todo ids arrive as raw path segments; resolving them always happens after
/// the user has been resolved.
#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn register(&self, input: NewUser) -> TodoResult<User>;
    async fn resolve_user(&self, username: &str) -> TodoResult<User>;
    async fn list(&self, username: &str) -> TodoResult<Vec<Todo>>;
    async fn create(&self, username: &str, input: TodoInput) -> TodoResult<Todo>;
    async fn update(&self, username: &str, id: &str, input: TodoInput) -> TodoResult<EditedTodo>;
    async fn complete(&self, username: &str, id: &str) -> TodoResult<Todo>;
    async fn delete(&self, username: &str, id: &str) -> TodoResult<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: UserRepository, G: IdGenerator = RandomIds> {
    repo: R,
    ids: G,
}

impl<R: UserRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo, ids: RandomIds } }
}

impl<R: UserRepository, G: IdGenerator> TodoServiceImpl<R, G> {
    pub fn with_ids(repo: R, ids: G) -> Self { Self { repo, ids } }

    async fn resolve_todo_id(&self, username: &str, raw: &str) -> TodoResult<TodoId> {
        match TodoId::parse(raw) {
            Some(id) => Ok(id),
            None => {
                self.resolve_user(username).await?;
                Err(TodoError::TodoNotFound)
            }
        }
    }
}

#[async_trait]
impl<R: UserRepository, G: IdGenerator> TodoService for TodoServiceImpl<R, G> {
    async fn register(&self, input: NewUser) -> TodoResult<User> {
        let registration = Registration::try_from(input)?;
        let user = self.repo.create_user(User::new(UserId(self.ids.generate()), registration)).await?;
        info!(username = %user.username, user_id = %user.id.0, "registered user");
        Ok(user)
    }

    async fn resolve_user(&self, username: &str) -> TodoResult<User> {
        self.repo.find_by_username(username).await.ok_or(TodoError::UserNotFound)
    }

    async fn list(&self, username: &str) -> TodoResult<Vec<Todo>> { self.repo.list_todos(username).await }

    async fn create(&self, username: &str, input: TodoInput) -> TodoResult<Todo> {
        let todo = Todo::new(TodoId(self.ids.generate()), input, Utc::now());
        let todo = self.repo.append_todo(username, todo).await?;
        debug!(username, todo_id = %todo.id, "created todo");
        Ok(todo)
    }

    async fn update(&self, username: &str, id: &str, input: TodoInput) -> TodoResult<EditedTodo> {
        let id = self.resolve_todo_id(username, id).await?;
        let todo = self.repo.edit_todo(username, id, input).await?;
        debug!(username, todo_id = %id, "updated todo");
        Ok(EditedTodo::from(&todo))
    }

    async fn complete(&self, username: &str, id: &str) -> TodoResult<Todo> {
        let id = self.resolve_todo_id(username, id).await?;
        let todo = self.repo.complete_todo(username, id).await?;
        debug!(username, todo_id = %id, "completed todo");
        Ok(todo)
    }

    async fn delete(&self, username: &str, id: &str) -> TodoResult<()> {
        let id = self.resolve_todo_id(username, id).await?;
        self.repo.delete_todo(username, id).await?;
        debug!(username, todo_id = %id, "deleted todo");
        Ok(())
    }
}
