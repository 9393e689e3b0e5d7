//! 服务启动
//!
//! 组装故事路由与可观测性路由，并负责监听端口。

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{self, app_state::AppState};
use crate::config::AppConfig;
use crate::error::Result;
use crate::observability::{AppMetrics, ObservabilityState, create_observability_router};
use crate::render::HtmlRenderer;
use crate::storage::{InMemoryStoryStore, StoryStore, seed};

/// 创建存储并按配置写入种子故事
pub fn build_store(config: &AppConfig) -> Arc<dyn StoryStore> {
    let store: Arc<dyn StoryStore> = Arc::new(InMemoryStoryStore::new());
    if config.seed.enabled {
        seed(store.as_ref(), &config.seed.stories);
    }
    info!("Story store initialized with {} stories", store.len());
    store
}

/// 组装完整路由，故事路由与可观测性路由共享同一份存储和指标
pub fn build_router(config: &AppConfig, store: Arc<dyn StoryStore>) -> Router {
    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(
        store.clone(),
        Box::new(HtmlRenderer::new(&config.app_name)),
        metrics.clone(),
    );

    let observability_state =
        ObservabilityState::new(env!("CARGO_PKG_VERSION"), metrics, store);
    create_observability_router(observability_state).merge(api::create_router(app_state))
}

/// 绑定地址并运行服务直到退出
pub async fn serve(config: &AppConfig, router: Router) -> Result<()> {
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
