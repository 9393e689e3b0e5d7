use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};
use tracing::debug;

use crate::{
    api::app_state::AppState,
    error::AppError,
    models::story::StoryId,
    render::{
        ViewModel, ViewValue,
        html::{INDEX_VIEW, TEXT_VIEW},
    },
};

/// GET / - 列出所有故事
pub async fn list_texts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stories = state.store.all();
    debug!("Listing {} stories", stories.len());

    let model = ViewModel::new().with("texts", ViewValue::Stories(stories));
    let body = state.renderer.render(INDEX_VIEW, &model)?;
    state.metrics.record_list();

    Ok(Html(body))
}

/// GET /text/:id - 查看单个故事
///
/// 无法解析为非负整数的 ID 与不存在的 ID 一样返回 404。
pub async fn get_text(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting story: {}", raw_id);

    let story = StoryId::parse(&raw_id)
        .and_then(|id| state.store.find_by_id(id))
        .ok_or_else(|| AppError::NotFound(format!("Story not found: {}", raw_id)))?;

    let model = ViewModel::new().with("text", ViewValue::Story(story));
    let body = state.renderer.render(TEXT_VIEW, &model)?;
    state.metrics.record_view();

    Ok(Html(body))
}
