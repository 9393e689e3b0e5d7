//! 内存故事存储
//!
//! 以单把互斥锁保护 ID 计数器和故事列表，保证 ID 唯一性与可见性。

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::models::story::{Story, StoryId};
use crate::storage::repository::StoryStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    stories: Vec<Arc<Story>>,
}

impl Inner {
    fn position(&self, id: StoryId) -> Option<usize> {
        self.stories.iter().position(|s| s.id() == id)
    }
}

/// 内存存储实现
#[derive(Debug, Default)]
pub struct InMemoryStoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoryStore for InMemoryStoryStore {
    fn create(&self, title: &str, body: &str) -> Arc<Story> {
        let mut inner = self.inner.lock();
        let id = StoryId::new(inner.next_id);
        inner.next_id += 1;
        debug!("Created story {}: {}", id, title);
        Arc::new(Story::new(id, title, body))
    }

    fn persist(&self, story: &Arc<Story>) {
        let mut inner = self.inner.lock();
        if inner.position(story.id()).is_some() {
            return;
        }
        inner.stories.push(Arc::clone(story));
        debug!("Persisted story {}", story.id());
    }

    fn remove(&self, story: &Story) {
        let mut inner = self.inner.lock();
        if let Some(index) = inner.position(story.id()) {
            inner.stories.remove(index);
            debug!("Removed story {}", story.id());
        }
    }

    fn contains(&self, story: &Story) -> bool {
        self.inner.lock().position(story.id()).is_some()
    }

    fn all(&self) -> Vec<Arc<Story>> {
        self.inner.lock().stories.clone()
    }

    fn find_by_id(&self, id: StoryId) -> Option<Arc<Story>> {
        self.inner
            .lock()
            .stories
            .iter()
            .find(|s| s.id() == id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.inner.lock().stories.len()
    }
}
