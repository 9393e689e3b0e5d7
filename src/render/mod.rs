//! 渲染模块
//!
//! 将视图名与视图模型转换为响应正文。路由层只负责准备视图模型，从不自行格式化输出。

pub mod html;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::story::Story;

pub use html::HtmlRenderer;

/// 视图模型中的单个值
#[derive(Debug, Clone)]
pub enum ViewValue {
    Stories(Vec<Arc<Story>>),
    Story(Arc<Story>),
}

/// 命名视图模型
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    values: HashMap<String, ViewValue>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: ViewValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewValue> {
        self.values.get(name)
    }

    /// 取出故事列表，缺失或类型不符时返回渲染错误
    pub fn stories(&self, name: &str) -> Result<&[Arc<Story>]> {
        match self.get(name) {
            Some(ViewValue::Stories(stories)) => Ok(stories.as_slice()),
            _ => Err(AppError::Render(format!("missing story list `{}`", name))),
        }
    }

    /// 取出单个故事，缺失或类型不符时返回渲染错误
    pub fn story(&self, name: &str) -> Result<&Story> {
        match self.get(name) {
            Some(ViewValue::Story(story)) => Ok(story.as_ref()),
            _ => Err(AppError::Render(format!("missing story `{}`", name))),
        }
    }
}

/// 渲染器 trait
pub trait Renderer: Send + Sync {
    /// 渲染指定视图
    fn render(&self, view: &str, model: &ViewModel) -> Result<String>;
}
