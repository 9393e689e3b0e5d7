//! 初始数据
//!
//! 启动时通过公开的存储接口创建并持久化固定故事。

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage::repository::StoryStore;

/// 种子故事
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedStory {
    pub title: String,
    pub body: String,
}

impl SeedStory {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// 默认种子数据
pub fn default_fixtures() -> Vec<SeedStory> {
    vec![SeedStory::new(
        "Humpty Dumpty",
        "Humpty Dumpty sat on the wall,\nHumpty Dumpty had a great fall.\n\nAll the king's horses and all the king's men\nCouldn't put Humpty together again.",
    )]
}

/// 按顺序创建并持久化种子故事，返回写入数量
pub fn seed(store: &dyn StoryStore, fixtures: &[SeedStory]) -> usize {
    for fixture in fixtures {
        let story = store.create(&fixture.title, &fixture.body);
        store.persist(&story);
    }
    info!("Seeded {} stories", fixtures.len());
    fixtures.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryStoryStore;

    #[test]
    fn test_seed_persists_fixtures_in_order() {
        let store = InMemoryStoryStore::new();
        let fixtures = vec![SeedStory::new("A", "a"), SeedStory::new("B", "b")];

        assert_eq!(seed(&store, &fixtures), 2);

        let titles: Vec<String> = store.all().iter().map(|s| s.title().to_string()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_default_fixture_is_humpty_dumpty() {
        let store = InMemoryStoryStore::new();
        seed(&store, &default_fixtures());

        let story = store.all().into_iter().next().unwrap();
        assert_eq!(story.id().value(), 0);
        assert_eq!(story.title(), "Humpty Dumpty");
        assert!(story.body().starts_with("Humpty Dumpty sat on the wall"));
    }
}
