use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::{TodoError, TodoResult},
    repository::UserRepository,
    todo::{Todo, TodoId, TodoInput},
    user::User,
};

/// Process-local store keyed by username. Clones share the same users.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn with_todo<T>(
        &self,
        username: &str,
        id: TodoId,
        f: impl FnOnce(&mut Vec<Todo>, usize) -> T,
    ) -> TodoResult<T> {
        let mut users = self.users.write().await;
        let user = users.get_mut(username).ok_or(TodoError::UserNotFound)?;
        let index = user.todo_index(id)?;
        Ok(f(&mut user.todos, index))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: User) -> TodoResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(TodoError::Conflict);
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }

    async fn list_todos(&self, username: &str) -> TodoResult<Vec<Todo>> {
        let users = self.users.read().await;
        let user = users.get(username).ok_or(TodoError::UserNotFound)?;
        Ok(user.todos.clone())
    }

    async fn append_todo(&self, username: &str, todo: Todo) -> TodoResult<Todo> {
        let mut users = self.users.write().await;
        let user = users.get_mut(username).ok_or(TodoError::UserNotFound)?;
        user.todos.push(todo.clone());
        Ok(todo)
    }

    async fn edit_todo(&self, username: &str, id: TodoId, input: TodoInput) -> TodoResult<Todo> {
        self.with_todo(username, id, |todos, index| {
            let todo = &mut todos[index];
            todo.title = input.title;
            todo.deadline = input.deadline;
            todo.clone()
        })
        .await
    }

    async fn complete_todo(&self, username: &str, id: TodoId) -> TodoResult<Todo> {
        self.with_todo(username, id, |todos, index| {
            let todo = &mut todos[index];
            todo.done = true;
            todo.clone()
        })
        .await
    }

    async fn delete_todo(&self, username: &str, id: TodoId) -> TodoResult<()> {
        self.with_todo(username, id, |todos, index| {
            todos.remove(index);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Registration, UserId};
    use chrono::Utc;
    use uuid::Uuid;

    fn user(username: &str) -> User {
        User::new(
            UserId(Uuid::new_v4()),
            Registration { name: "Someone".into(), username: username.into() },
        )
    }

    fn todo(title: &str) -> Todo {
        let input = TodoInput { title: Some(title.into()), deadline: None };
        Todo::new(TodoId(Uuid::new_v4()), input, Utc::now())
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemoryUserRepository::new();
        let other = repo.clone();
        repo.create_user(user("ada")).await.unwrap();
        assert!(other.find_by_username("ada").await.is_some());
    }

    #[tokio::test]
    async fn user_is_resolved_before_todo() {
        let repo = InMemoryUserRepository::new();
        let err = repo.complete_todo("ghost", TodoId(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err, TodoError::UserNotFound);

        repo.create_user(user("ada")).await.unwrap();
        let err = repo.complete_todo("ada", TodoId(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err, TodoError::TodoNotFound);
    }

    #[tokio::test]
    async fn delete_keeps_remaining_order() {
        let repo = InMemoryUserRepository::new();
        repo.create_user(user("ada")).await.unwrap();
        let a = repo.append_todo("ada", todo("A")).await.unwrap();
        let b = repo.append_todo("ada", todo("B")).await.unwrap();
        let c = repo.append_todo("ada", todo("C")).await.unwrap();

        repo.delete_todo("ada", b.id).await.unwrap();

        let ids: Vec<_> = repo.list_todos("ada").await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }
}
