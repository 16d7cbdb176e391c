use tempfile::TempDir;

use crate::{
    db::{connect_to_db, ensure_schema, seed_clubs, DbPool},
    models::NewClub,
};

/// A pool over a fresh database file that is removed when dropped.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forum.db");
        let pool = connect_to_db(path.to_str().unwrap(), 4).unwrap();
        ensure_schema(&pool).await.unwrap();
        Self { pool, _dir: dir }
    }

    /// A database holding a single club, `Chess Club` with id 1.
    pub async fn with_chess_club() -> Self {
        let test = Self::new().await;
        seed_clubs(
            &test.pool,
            &[NewClub {
                name: "Chess Club",
                description: None,
            }],
        )
        .await
        .unwrap();
        test
    }
}
