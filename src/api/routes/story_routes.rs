//! Story Routes
//!
//! 定义故事相关的只读路由。

use crate::api::handlers::story_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建故事路由器
pub fn create_story_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_texts))
        .route("/text/:id", get(get_text))
}
