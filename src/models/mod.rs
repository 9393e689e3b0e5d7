//! 核心数据模型模块

pub mod story;

pub use story::{Story, StoryId};
