use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("dbLearningProgress").await.unwrap(), None);

    repo.set("dbLearningProgress", r#"["deadlock","cte"]"#)
        .await
        .expect("set");
    let fetched = repo.get("dbLearningProgress").await.expect("get");
    assert_eq!(fetched.as_deref(), Some(r#"["deadlock","cte"]"#));
}

#[tokio::test]
async fn sqlite_set_overwrites_and_remove_deletes() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set("k", "[\"a\"]").await.unwrap();
    repo.set("k", "[]").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("[]"));

    repo.remove("k").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap(), None);

    // removing a missing key is not an error
    repo.remove("k").await.unwrap();
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("k", "v").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn sqlite_storage_keeps_session_namespace_separate() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage.session.set("dbLearningExpanded", "[\"cte\"]").await.unwrap();
    assert_eq!(storage.persistent.get("dbLearningExpanded").await.unwrap(), None);
    assert_eq!(
        storage
            .session
            .get("dbLearningExpanded")
            .await
            .unwrap()
            .as_deref(),
        Some("[\"cte\"]")
    );
}
