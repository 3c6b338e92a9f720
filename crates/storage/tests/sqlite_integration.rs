use lesson_core::model::Difficulty;
use storage::repository::PreferenceRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_the_difficulty_preference() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_prefs?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_difficulty().await.unwrap(), None);

    repo.save_difficulty(Difficulty::Hard).await.unwrap();
    assert_eq!(repo.get_difficulty().await.unwrap(), Some(Difficulty::Hard));

    // A second save overwrites the single slot rather than adding rows.
    repo.save_difficulty(Difficulty::Easy).await.unwrap();
    assert_eq!(repo.get_difficulty().await.unwrap(), Some(Difficulty::Easy));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.save_difficulty(Difficulty::Medium).await.unwrap();
    assert_eq!(
        repo.get_difficulty().await.unwrap(),
        Some(Difficulty::Medium)
    );
}
