//! Storyboard - 内存故事存储服务
//!
//! 在进程内保存故事，并通过两个只读 HTTP 端点对外展示：列表与按 ID 查看。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod render;
pub mod server;
pub mod storage;
