//! Row operations behind the route handlers.
//!
//! Every function checks a connection out of the pool, runs a single
//! statement and hands the connection back when the guard goes out of scope.

pub mod club;
pub mod comment;
pub mod thread;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::borrow::Cow;

use crate::error::AppError;

/// Turns a rejected foreign key into a not-found error for the referenced row.
pub(crate) fn missing_parent(
    err: DieselError,
    message: impl Into<Cow<'static, str>>,
) -> AppError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            AppError::not_found(message)
        }
        err => err.into(),
    }
}
