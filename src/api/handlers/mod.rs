//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod story_handler;

pub use story_handler::*;
