//! API 模块
//!
//! 将 HTTP 请求映射到故事存储操作。

pub mod app_state;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::api::app_state::AppState;
use crate::api::middleware::security_headers_middleware;
use crate::observability::metrics_middleware;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState) -> Router {
    let metrics = app_state.metrics.clone();

    Router::new()
        .merge(routes::story_routes::create_story_router())
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn_with_state(
            metrics,
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
