use diesel::{insert_into, prelude::*};
use diesel_async::RunQueryDsl;

use super::missing_parent;
use crate::{
    error::AppResult,
    models::{Comment, NewComment},
    schema::comments,
    DbPool,
};

/// Comments on a thread in the order they were posted.
pub async fn list_comments_by_thread(pool: &DbPool, thread_id: i32) -> AppResult<Vec<Comment>> {
    let conn = &mut pool.get().await?;

    Ok(comments::table
        .filter(comments::thread_id.eq(thread_id))
        .select(Comment::as_select())
        .order(comments::id.asc())
        .load(conn)
        .await?)
}

pub async fn insert_comment(
    pool: &DbPool,
    thread_id: i32,
    user_name: &str,
    content: &str,
    anon_id: &str,
) -> AppResult<()> {
    let conn = &mut pool.get().await?;

    insert_into(comments::table)
        .values(NewComment {
            thread_id,
            user_name,
            content,
            anon_id,
        })
        .execute(conn)
        .await
        .map_err(|e| missing_parent(e, "the thread does not exist"))?;

    tracing::debug!(thread_id, "comment posted");
    Ok(())
}
