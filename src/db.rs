use deadpool::managed::Pool;
use diesel::{prelude::*, ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::{
    pooled_connection::{AsyncDieselConnectionManager, ManagerConfig},
    sync_connection_wrapper::SyncConnectionWrapper,
    AsyncConnection, RunQueryDsl, SimpleAsyncConnection,
};
use futures_util::{future::BoxFuture, FutureExt};

use crate::{error::AppResult, models::NewClub, schema::clubs};

pub type SqliteConn = SyncConnectionWrapper<SqliteConnection>;
pub type DbPool = Pool<AsyncDieselConnectionManager<SqliteConn>>;

const SCHEMA: &str = include_str!("../sql/schema.sql");

// sqlite keeps both settings per connection, so every pooled connection needs them
const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;";

pub const DEFAULT_CLUBS: &[NewClub<'static>] = &[
    NewClub {
        name: "Chess Club",
        description: Some("Openings, endgames and post-game analysis"),
    },
    NewClub {
        name: "Book Club",
        description: Some("What we are reading and what we thought of it"),
    },
    NewClub {
        name: "Study Hall",
        description: Some("Find people to study with"),
    },
    NewClub {
        name: "Debate Club",
        description: Some("For people who like a good argument"),
    },
    NewClub {
        name: "Free Talk",
        description: Some("Anything goes"),
    },
];

fn establish(url: &str) -> BoxFuture<'_, ConnectionResult<SqliteConn>> {
    async move {
        let mut conn = SqliteConn::establish(url).await?;
        conn.batch_execute(CONNECTION_PRAGMAS)
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

pub fn connect_to_db(db_url: &str, max_size: usize) -> anyhow::Result<DbPool> {
    // deadpool waits forever for a permit when the pool has none
    if max_size == 0 {
        anyhow::bail!("the connection pool needs at least one connection");
    }

    let mut manager_config = ManagerConfig::default();
    manager_config.custom_setup = Box::new(establish);
    let manager =
        AsyncDieselConnectionManager::<SqliteConn>::new_with_config(db_url, manager_config);

    Ok(Pool::builder(manager).max_size(max_size).build()?)
}

/// Creates the forum tables if they do not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> AppResult<()> {
    let conn = &mut pool.get().await?;
    conn.batch_execute(SCHEMA).await?;
    Ok(())
}

/// Inserts `seed` into an empty clubs table. Returns the number of rows
/// inserted, which is zero if any club already exists.
pub async fn seed_clubs(pool: &DbPool, seed: &[NewClub<'_>]) -> AppResult<usize> {
    let conn = &mut pool.get().await?;

    let existing: i64 = clubs::table.count().get_result(conn).await?;
    if existing > 0 || seed.is_empty() {
        return Ok(0);
    }

    let inserted = diesel::insert_into(clubs::table)
        .values(seed)
        .execute(conn)
        .await?;
    tracing::info!("seeded {inserted} clubs");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store, test_util::TestDb};

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let test = TestDb::new().await;

        ensure_schema(&test.pool).await.unwrap();
        ensure_schema(&test.pool).await.unwrap();

        assert!(store::club::list_clubs(&test.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeds_only_an_empty_table() {
        let test = TestDb::new().await;

        let inserted = seed_clubs(&test.pool, DEFAULT_CLUBS).await.unwrap();
        assert_eq!(inserted, DEFAULT_CLUBS.len());

        let again = seed_clubs(&test.pool, DEFAULT_CLUBS).await.unwrap();
        assert_eq!(again, 0);

        let clubs = store::club::list_clubs(&test.pool).await.unwrap();
        assert_eq!(clubs.len(), DEFAULT_CLUBS.len());
        assert_eq!(clubs[0].name, "Chess Club");
    }

    #[tokio::test]
    async fn seeds_nullable_descriptions() {
        let test = TestDb::new().await;
        let seed = [
            NewClub {
                name: "Chess Club",
                description: None,
            },
            NewClub {
                name: "Book Club",
                description: Some("Monthly picks"),
            },
        ];

        assert_eq!(seed_clubs(&test.pool, &seed).await.unwrap(), 2);

        let clubs = store::club::list_clubs(&test.pool).await.unwrap();
        assert_eq!(clubs[0].description, None);
        assert_eq!(clubs[1].description.as_deref(), Some("Monthly picks"));
    }

    #[test]
    fn rejects_an_empty_pool() {
        let err = connect_to_db("unused.db", 0).err().unwrap();
        assert!(err.to_string().contains("at least one connection"));
    }

    #[tokio::test]
    async fn pooled_connections_enforce_foreign_keys() {
        let test = TestDb::new().await;
        let conn = &mut test.pool.get().await.unwrap();

        let enabled: Vec<i32> = diesel::sql_query("PRAGMA foreign_keys")
            .load::<ForeignKeys>(conn)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.foreign_keys)
            .collect();

        assert_eq!(enabled, vec![1]);
    }

    #[derive(QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }
}
