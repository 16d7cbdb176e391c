use askama::Template;

use crate::models::{Club, Comment, Thread, ThreadSummary};

#[derive(Template)]
#[template(path = "index.html")]
pub struct ClubList {
    pub clubs: Vec<Club>,
}

#[derive(Template)]
#[template(path = "threads.html")]
pub struct ThreadList {
    pub threads: Vec<ThreadSummary>,
    pub club_name: String,
    pub club_id: i32,
    /// Name of the active ordering, `newest` or `popular`.
    pub sort: &'static str,
}

#[derive(Template)]
#[template(path = "thread_details.html")]
pub struct ThreadDetails {
    pub thread: Thread,
    pub comments: Vec<Comment>,
}

#[derive(Template)]
#[template(path = "post_thread.html")]
pub struct PostThreadForm {
    pub club_id: i32,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub message: &'a str,
}
