use crate::schema::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = clubs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Club))]
#[diesel(table_name = threads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Thread {
    pub id: i32,
    pub club_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Thread))]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
    pub id: i32,
    pub thread_id: i32,
    pub user_name: String,
    pub content: String,
    /// Poster tag derived from the client address and the posting day.
    pub anon_id: String,
    pub created_at: NaiveDateTime,
}

/// A thread together with the number of comments posted to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadSummary {
    pub thread: Thread,
    pub comment_count: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = clubs)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewClub<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = threads)]
pub struct NewThread<'a> {
    pub club_id: i32,
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub thread_id: i32,
    pub user_name: &'a str,
    pub content: &'a str,
    pub anon_id: &'a str,
}
