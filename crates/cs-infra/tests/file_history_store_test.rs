//! File history store tests against real temporary files.

use std::path::Path;

use cs_core::errors::SelectError;
use cs_core::ports::HistoryStorePort;
use cs_core::Config;
use cs_infra::FileHistoryStore;
use tempfile::TempDir;

fn config_at(dir: &Path) -> Config {
    Config {
        history_path: dir.join(".clipstash_history"),
        log_path: dir.join(".clipstash_monitor.log"),
        ..Config::default()
    }
}

fn store_at(dir: &Path) -> FileHistoryStore {
    FileHistoryStore::new(&config_at(dir))
}

async fn contents(store: &FileHistoryStore) -> Vec<String> {
    store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.content().to_string())
        .collect()
}

#[tokio::test]
async fn add_persists_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());

    assert!(store.add("hello").await.unwrap());
    assert!(store.add("world").await.unwrap());

    assert_eq!(contents(&store).await, vec!["world", "hello"]);
}

#[tokio::test]
async fn add_skips_duplicate_head_and_empty_input() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());

    assert!(store.add("hello").await.unwrap());
    assert!(!store.add("hello").await.unwrap());
    assert!(!store.add("  hello\n").await.unwrap());
    assert!(!store.add("").await.unwrap());
    assert!(!store.add("   \n").await.unwrap());

    assert_eq!(contents(&store).await, vec!["hello"]);
}

#[tokio::test]
async fn add_trims_to_capacity() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());

    for content in ["A", "B", "C", "D", "E", "F"] {
        assert!(store.add(content).await.unwrap());
    }

    assert_eq!(contents(&store).await, vec!["F", "E", "D", "C", "B"]);
}

#[tokio::test]
async fn missing_file_lists_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn history_is_shared_across_instances() {
    let dir = TempDir::new().unwrap();

    let writer = store_at(dir.path());
    writer.add("from the monitor").await.unwrap();

    // A separate invocation sees the entry and its duplicate check
    // applies to the persisted head.
    let reader = store_at(dir.path());
    assert_eq!(contents(&reader).await, vec!["from the monitor"]);
    assert!(!reader.add("from the monitor").await.unwrap());
}

#[tokio::test]
async fn select_returns_one_based_entry() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());
    store.add("old").await.unwrap();
    store.add("new").await.unwrap();

    assert_eq!(store.select(1).await.unwrap().content(), "new");
    assert_eq!(store.select(2).await.unwrap().content(), "old");
}

#[tokio::test]
async fn select_out_of_range_names_index_and_len() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());
    store.add("only").await.unwrap();

    match store.select(0).await {
        Err(SelectError::OutOfRange { index: 0, len: 1 }) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    match store.select(4).await {
        Err(SelectError::OutOfRange { index: 4, len: 1 }) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn clear_truncates_the_file() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());
    store.add("a").await.unwrap();
    store.add("b").await.unwrap();

    store.clear().await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
    let raw = std::fs::read_to_string(dir.path().join(".clipstash_history")).unwrap();
    assert!(raw.is_empty());
}

#[tokio::test]
async fn content_containing_the_separator_round_trips() {
    let dir = TempDir::new().unwrap();
    let config = config_at(dir.path());
    let store = FileHistoryStore::new(&config);

    let tricky = format!("above\n{}\nbelow", config.separator_token);
    store.add(&tricky).await.unwrap();
    store.add("plain").await.unwrap();

    assert_eq!(contents(&store).await, vec!["plain", tricky.as_str()]);
}

#[tokio::test]
async fn mutations_leave_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());
    store.add("one").await.unwrap();
    store.clear().await.unwrap();
    store.add("two").await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![".clipstash_history"]);
}

#[tokio::test]
async fn hand_edited_blank_blocks_are_ignored() {
    let dir = TempDir::new().unwrap();
    let config = config_at(dir.path());
    let sep = &config.separator_token;
    std::fs::write(
        &config.history_path,
        format!("real\n{sep}\n\n{sep}\nalso real\n{sep}\n  \n"),
    )
    .unwrap();

    let store = FileHistoryStore::new(&config);
    assert_eq!(contents(&store).await, vec!["real", "also real"]);
}

#[tokio::test]
async fn concurrent_adds_serialize_without_losing_entries() {
    let dir = TempDir::new().unwrap();
    let store = store_at(dir.path());

    let (a, b, c) = tokio::join!(
        store.add("alpha"),
        store.add("beta"),
        store.add("gamma"),
    );
    assert!(a.unwrap() && b.unwrap() && c.unwrap());

    let mut stored = contents(&store).await;
    stored.sort();
    assert_eq!(stored, vec!["alpha", "beta", "gamma"]);
}
