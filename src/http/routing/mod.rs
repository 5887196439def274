use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::todo_service::TodoService;
use crate::http::routes::{self, AppState};

pub fn app(router: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(router)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Full application router around `service`.
pub fn build<S: TodoService + Clone>(service: S) -> Router {
    app(routes::router(AppState { service }))
}
