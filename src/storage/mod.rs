//! 存储层模块
//!
//! 提供进程内的故事存储，数据随进程结束而丢失。

pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::InMemoryStoryStore;
pub use repository::StoryStore;
pub use seed::{SeedStory, default_fixtures, seed};
