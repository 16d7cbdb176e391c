use diesel::{dsl::count, insert_into, prelude::*};
use diesel_async::RunQueryDsl;
use serde::Deserialize;

use super::missing_parent;
use crate::{
    error::{AppError, AppResult},
    models::{NewThread, Thread, ThreadSummary},
    schema::{comments, threads},
    DbPool,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadSort {
    /// Most recently started first.
    #[default]
    Newest,
    /// Most commented first; ties go to the newer thread.
    Popular,
}

impl ThreadSort {
    pub fn as_str(self) -> &'static str {
        match self {
            ThreadSort::Newest => "newest",
            ThreadSort::Popular => "popular",
        }
    }
}

/// Threads posted to a club with their comment counts.
pub async fn list_threads_by_club(
    pool: &DbPool,
    club_id: i32,
    sort: ThreadSort,
) -> AppResult<Vec<ThreadSummary>> {
    let conn = &mut pool.get().await?;

    let query = threads::table
        .left_join(comments::table)
        .filter(threads::club_id.eq(club_id))
        .group_by(threads::id)
        .select((Thread::as_select(), count(comments::id.nullable())));

    let rows: Vec<(Thread, i64)> = match sort {
        ThreadSort::Newest => query.order(threads::id.desc()).load(conn).await?,
        ThreadSort::Popular => {
            query
                .order((count(comments::id.nullable()).desc(), threads::id.desc()))
                .load(conn)
                .await?
        }
    };

    Ok(rows
        .into_iter()
        .map(|(thread, comment_count)| ThreadSummary {
            thread,
            comment_count,
        })
        .collect())
}

pub async fn get_thread(pool: &DbPool, thread_id: i32) -> AppResult<Thread> {
    let conn = &mut pool.get().await?;

    threads::table
        .find(thread_id)
        .select(Thread::as_select())
        .first(conn)
        .await
        .optional()?
        .ok_or_else(|| AppError::not_found("the thread does not exist"))
}

pub async fn insert_thread(
    pool: &DbPool,
    club_id: i32,
    title: &str,
    content: &str,
) -> AppResult<()> {
    let conn = &mut pool.get().await?;

    insert_into(threads::table)
        .values(NewThread {
            club_id,
            title,
            content,
        })
        .execute(conn)
        .await
        .map_err(|e| missing_parent(e, "the club does not exist"))?;

    tracing::debug!(club_id, "thread posted");
    Ok(())
}
