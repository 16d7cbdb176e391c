use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{
    error::{AppError, AppResult},
    models::Club,
    schema::clubs,
    DbPool,
};

pub async fn list_clubs(pool: &DbPool) -> AppResult<Vec<Club>> {
    let conn = &mut pool.get().await?;

    Ok(clubs::table
        .select(Club::as_select())
        .order(clubs::id.asc())
        .load(conn)
        .await?)
}

pub async fn get_club_name(pool: &DbPool, club_id: i32) -> AppResult<String> {
    let conn = &mut pool.get().await?;

    clubs::table
        .find(club_id)
        .select(clubs::name)
        .first(conn)
        .await
        .optional()?
        .ok_or_else(|| AppError::not_found("the club does not exist"))
}
