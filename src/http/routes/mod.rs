pub mod todos;
pub mod users;

use axum::Router;

use crate::application::todo_service::TodoService;

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    users::router(state.clone()).merge(todos::router(state))
}
