use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Path, Query},
    response::{Html, Redirect},
    routing::get,
    Extension, Form, Router,
};
use serde::Deserialize;

use super::require_form;
use crate::{
    error::AppResult,
    store::{
        club,
        thread::{self, ThreadSort},
    },
    views::{ClubList, PostThreadForm, ThreadList},
    DbPool,
};

#[derive(Deserialize)]
struct ThreadListQuery {
    #[serde(default)]
    sort: ThreadSort,
}

#[derive(Deserialize)]
struct PostThreadRequest {
    title: String,
    content: String,
}

async fn list(Extension(pool): Extension<DbPool>) -> AppResult<Html<String>> {
    let clubs = club::list_clubs(&pool).await?;

    Ok(Html(ClubList { clubs }.render()?))
}

async fn threads(
    Extension(pool): Extension<DbPool>,
    Path(club_id): Path<i32>,
    Query(query): Query<ThreadListQuery>,
) -> AppResult<Html<String>> {
    let club_name = club::get_club_name(&pool, club_id).await?;
    let threads = thread::list_threads_by_club(&pool, club_id, query.sort).await?;

    Ok(Html(
        ThreadList {
            threads,
            club_name,
            club_id,
            sort: query.sort.as_str(),
        }
        .render()?,
    ))
}

async fn post_thread_form(Path(club_id): Path<i32>) -> AppResult<Html<String>> {
    Ok(Html(PostThreadForm { club_id }.render()?))
}

async fn post_thread(
    Extension(pool): Extension<DbPool>,
    Path(club_id): Path<i32>,
    form: Result<Form<PostThreadRequest>, FormRejection>,
) -> AppResult<Redirect> {
    let req = require_form(form)?;

    thread::insert_thread(&pool, club_id, &req.title, &req.content).await?;

    Ok(Redirect::to(&format!("/club/{club_id}")))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(list))
        .route("/club/:club_id", get(threads))
        .route("/post_thread/:club_id", get(post_thread_form).post(post_thread))
}
