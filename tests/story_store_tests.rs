// Integration tests for the story store
//
// Tests cover:
// - Id assignment and uniqueness
// - Idempotent persist and no-op remove
// - Lookup round trips and the not-found contract
// - Insertion order

use rstest::{fixture, rstest};
use std::sync::Arc;

use storyboard::models::{Story, StoryId};
use storyboard::storage::{InMemoryStoryStore, StoryStore};

#[fixture]
fn store() -> InMemoryStoryStore {
    InMemoryStoryStore::new()
}

fn create_persisted(store: &InMemoryStoryStore, title: &str, body: &str) -> Arc<Story> {
    let story = store.create(title, body);
    store.persist(&story);
    story
}

fn ids(stories: &[Arc<Story>]) -> Vec<u64> {
    stories.iter().map(|s| s.id().value()).collect()
}

// ============ Scenarios ============

#[rstest]
fn test_single_story_round_trip(store: InMemoryStoryStore) {
    let story = create_persisted(&store, "Humpty Dumpty", "Humpty Dumpty sat on the wall...");

    let all = store.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id().value(), 0);
    assert_eq!(all[0].title(), "Humpty Dumpty");
    assert_eq!(all[0].body(), "Humpty Dumpty sat on the wall...");

    let found = store.find_by_id(StoryId::parse("0").unwrap()).unwrap();
    assert!(Arc::ptr_eq(&found, &story));
    assert!(store.find_by_id(StoryId::parse("1").unwrap()).is_none());
}

#[rstest]
fn test_two_stories_keep_creation_order(store: InMemoryStoryStore) {
    let a = create_persisted(&store, "A", "first");
    let b = create_persisted(&store, "B", "second");

    assert_eq!(a.id().value(), 0);
    assert_eq!(b.id().value(), 1);
    assert_eq!(ids(&store.all()), vec![0, 1]);
}

#[rstest]
fn test_persist_remove_then_lookup(store: InMemoryStoryStore) {
    let a = create_persisted(&store, "A", "gone soon");
    store.remove(&a);

    assert!(store.find_by_id(a.id()).is_none());
    assert!(store.all().is_empty());
    assert!(!store.contains(&a));
}

#[rstest]
fn test_persist_twice_is_idempotent(store: InMemoryStoryStore) {
    let a = create_persisted(&store, "A", "once");
    store.persist(&a);

    let all = store.all();
    assert_eq!(all.len(), 1);
    assert!(Arc::ptr_eq(&all[0], &a));
}

#[rstest]
#[case("-1")]
#[case("abc")]
#[case("")]
#[case("1e3")]
fn test_malformed_ids_never_parse(#[case] raw: &str) {
    assert!(StoryId::parse(raw).is_none());
}

// ============ Properties ============

#[rstest]
fn test_remove_absent_story_is_noop(store: InMemoryStoryStore) {
    let kept = create_persisted(&store, "kept", "");
    let detached = store.create("detached", "");

    store.remove(&detached);
    store.remove(&detached);

    assert_eq!(ids(&store.all()), vec![kept.id().value()]);
}

#[rstest]
fn test_never_issued_id_is_not_found(store: InMemoryStoryStore) {
    create_persisted(&store, "only", "");
    assert!(store.find_by_id(StoryId::parse("42").unwrap()).is_none());
}

#[rstest]
fn test_created_but_unpersisted_is_not_found(store: InMemoryStoryStore) {
    let story = store.create("draft", "");
    assert!(store.find_by_id(story.id()).is_none());
    assert!(store.is_empty());
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(50)]
fn test_every_persisted_story_round_trips(store: InMemoryStoryStore, #[case] count: usize) {
    let created: Vec<_> = (0..count)
        .map(|i| create_persisted(&store, &format!("story {i}"), "body"))
        .collect();

    assert_eq!(ids(&created), (0..count as u64).collect::<Vec<_>>());
    for story in store.all() {
        let found = store.find_by_id(story.id()).unwrap();
        assert!(Arc::ptr_eq(&found, &story));
    }
}

#[rstest]
fn test_order_unaffected_by_lookups(store: InMemoryStoryStore) {
    for title in ["c", "a", "b"] {
        create_persisted(&store, title, "");
    }
    let before = ids(&store.all());

    store.find_by_id(StoryId::parse("2").unwrap());
    store.find_by_id(StoryId::parse("0").unwrap());

    assert_eq!(ids(&store.all()), before);
    let titles: Vec<String> = store.all().iter().map(|s| s.title().to_string()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[rstest]
fn test_remove_keeps_remaining_order_and_ids_not_reused(store: InMemoryStoryStore) {
    let a = create_persisted(&store, "a", "");
    let b = create_persisted(&store, "b", "");
    let c = create_persisted(&store, "c", "");

    store.remove(&b);
    let d = create_persisted(&store, "d", "");

    assert_eq!(d.id().value(), 3);
    assert_eq!(
        ids(&store.all()),
        vec![a.id().value(), c.id().value(), d.id().value()]
    );
}

#[rstest]
fn test_stores_are_independent() {
    let first = InMemoryStoryStore::new();
    let second = InMemoryStoryStore::new();
    create_persisted(&first, "one", "");
    create_persisted(&first, "two", "");

    let story = create_persisted(&second, "fresh", "");
    assert_eq!(story.id().value(), 0);
    assert_eq!(second.len(), 1);
}
