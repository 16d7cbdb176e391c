use askama::Template;
use axum::{
    extract::{rejection::FormRejection, ConnectInfo, Path},
    http::HeaderMap,
    response::{Html, Redirect},
    routing::{get, post},
    Extension, Form, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::net::SocketAddr;

use super::require_form;
use crate::{
    anon,
    error::AppResult,
    store::{comment, thread},
    views::ThreadDetails,
    DbPool,
};

#[derive(Deserialize)]
struct PostCommentRequest {
    user_name: String,
    comment: String,
}

async fn details(
    Extension(pool): Extension<DbPool>,
    Path(thread_id): Path<i32>,
) -> AppResult<Html<String>> {
    let thread = thread::get_thread(&pool, thread_id).await?;
    let comments = comment::list_comments_by_thread(&pool, thread_id).await?;

    Ok(Html(ThreadDetails { thread, comments }.render()?))
}

async fn post_comment(
    Extension(pool): Extension<DbPool>,
    Path(thread_id): Path<i32>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    form: Result<Form<PostCommentRequest>, FormRejection>,
) -> AppResult<Redirect> {
    let req = require_form(form)?;
    let client_ip = anon::client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr));
    let anon_id = anon::anon_id(&client_ip, Utc::now().date_naive());

    comment::insert_comment(&pool, thread_id, &req.user_name, &req.comment, &anon_id).await?;

    Ok(Redirect::to(&format!("/thread/{thread_id}")))
}

pub fn app() -> Router {
    Router::new()
        .route("/thread/:thread_id", get(details))
        .route("/post_comment/:thread_id", post(post_comment))
}
