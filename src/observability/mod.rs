//! 可观测性模块
//!
//! 提供请求指标、结构化日志和健康检查。

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

use crate::config::config::LoggingConfig;
use crate::error::{AppError, Result};
use crate::storage::repository::StoryStore;

// ===== Simple Metrics =====

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub http_request_duration_sum: AtomicU64,
    pub stories_listed_total: AtomicU64,
    pub stories_viewed_total: AtomicU64,
    pub not_found_total: AtomicU64,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64, status: StatusCode) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::Relaxed);
        if status == StatusCode::NOT_FOUND {
            self.not_found_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_list(&self) {
        self.stories_listed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_view(&self) {
        self.stories_viewed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self, stories_persisted: usize) -> String {
        let requests = self.http_requests_total.load(Ordering::Relaxed);
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds summary
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP stories_listed_total Story list renders
# TYPE stories_listed_total counter
stories_listed_total {}
# HELP stories_viewed_total Single story renders
# TYPE stories_viewed_total counter
stories_viewed_total {}
# HELP not_found_total Requests answered with 404
# TYPE not_found_total counter
not_found_total {}
# HELP stories_persisted Stories currently in the store
# TYPE stories_persisted gauge
stories_persisted {}
"#,
            requests,
            self.http_request_duration_sum.load(Ordering::Relaxed) as f64 / 1000.0,
            requests,
            self.stories_listed_total.load(Ordering::Relaxed),
            self.stories_viewed_total.load(Ordering::Relaxed),
            self.not_found_total.load(Ordering::Relaxed),
            stories_persisted,
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub stories: usize,
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub store: Arc<dyn StoryStore>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl std::fmt::Debug for ObservabilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityState")
            .field("metrics", &self.metrics)
            .field("store", &"Arc<dyn StoryStore>")
            .field("start_time", &self.start_time)
            .field("version", &self.version)
            .finish()
    }
}

impl ObservabilityState {
    pub fn new(version: &str, metrics: Arc<AppMetrics>, store: Arc<dyn StoryStore>) -> Self {
        Self {
            metrics,
            store,
            start_time: Utc::now(),
            version: version.to_string(),
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
pub async fn health_check(State(state): State<ObservabilityState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        stories: state.store.len(),
    })
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// 就绪检查
pub async fn readiness() -> impl IntoResponse {
    (StatusCode::OK, "Ready")
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<ObservabilityState>) -> impl IntoResponse {
    (StatusCode::OK, state.metrics.gather(state.store.len()))
}

/// 版本信息端点
pub async fn version(State(state): State<ObservabilityState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: ObservabilityState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化日志
///
/// `RUST_LOG` 优先于配置中的级别。重复初始化时返回错误而不是 panic。
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true);

    if config.structured {
        builder
            .json()
            .try_init()
            .map_err(|e| AppError::Internal(e.to_string()))
    } else {
        builder
            .try_init()
            .map_err(|e| AppError::Internal(e.to_string()))
    }
}

// ===== Request Metrics Middleware =====

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    State(metrics): State<Arc<AppMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    metrics.record_http_request(duration_ms, response.status());

    response
}
