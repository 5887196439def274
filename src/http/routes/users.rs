use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use super::AppState;
use crate::{
    application::todo_service::TodoService,
    domain::user::{NewUser, User},
    http::{extract::JsonBody, types::ApiError},
};

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/users", post(register_user::<S>))
        .with_state(state)
}

async fn register_user<S: TodoService>(State(state): State<AppState<S>>, JsonBody(input): JsonBody<NewUser>) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
