// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Find a user by email, creating it on first sight. The login flow itself
/// lives outside this service; this exists so sessions have a user to hang
/// off (and so tests can mint authenticated requests).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM users WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("user lookup failed: {e}")))?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO users (email, created_at) VALUES (?1, ?2)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("user insert failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}
