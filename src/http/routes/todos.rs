use axum::{extract::{Path, State}, http::StatusCode, routing::{get, patch, put}, Json, Router};

use super::AppState;
use crate::{
    application::todo_service::TodoService,
    domain::todo::{EditedTodo, Todo, TodoPayload},
    http::{extract::{JsonBody, Username}, types::ApiError},
};

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/:id", put(update_todo::<S>).delete(delete_todo::<S>))
        .route("/todos/:id/done", patch(complete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>, Username(username): Username) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list(&username).await?))
}

// Without a JSON body the todo is stored with no title and an invalid deadline.
async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, Username(username): Username, JsonBody(payload): JsonBody<TodoPayload>) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = payload.into();
    let todo = state.service.create(&username, input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Username(username): Username, Path(id): Path<String>, JsonBody(payload): JsonBody<TodoPayload>) -> Result<Json<EditedTodo>, ApiError> {
    let input = payload.into();
    Ok(Json(state.service.update(&username, &id, input).await?))
}

async fn complete_todo<S: TodoService>(State(state): State<AppState<S>>, Username(username): Username, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.complete(&username, &id).await?))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Username(username): Username, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state.service.delete(&username, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
