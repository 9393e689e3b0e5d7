use std::sync::Arc;

use crate::models::story::{Story, StoryId};

/// 故事存储 trait
///
/// 所有操作都是同步的内存操作，且都是全函数：重复持久化与移除不存在的故事均为空操作。
pub trait StoryStore: Send + Sync {
    /// 创建故事并分配新 ID，不加入存储
    fn create(&self, title: &str, body: &str) -> Arc<Story>;

    /// 持久化故事；已存在时为空操作
    ///
    /// 成员判断只比较 ID。ID 只在同一存储内唯一，因此必须传入由本存储 `create` 的故事：
    /// 来自其他存储且 ID 已被占用的故事会被忽略。
    fn persist(&self, story: &Arc<Story>);

    /// 移除故事；不存在时为空操作
    fn remove(&self, story: &Story);

    /// 是否已持久化
    fn contains(&self, story: &Story) -> bool;

    /// 按插入顺序列出所有已持久化的故事
    fn all(&self) -> Vec<Arc<Story>>;

    /// 根据 ID 查找故事
    fn find_by_id(&self, id: StoryId) -> Option<Arc<Story>>;

    /// 已持久化的故事数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
