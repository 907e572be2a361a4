use lego_core::model::{Age, Progress, ProgressId, User, UserId, UserRef};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Maps driver errors, surfacing unique-constraint violations as `Conflict`.
pub(crate) fn db_err(e: sqlx::Error) -> StorageError {
    match &e {
        sqlx::Error::Database(inner) if inner.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Connection(e.to_string()),
    }
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn map_user_row(row: &SqliteRow) -> Result<User, StorageError> {
    let id: UserId = row
        .try_get::<String, _>("id")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let age = Age::new(row.try_get::<i64, _>("age").map_err(ser)?).map_err(ser)?;

    User::new(
        id,
        row.try_get::<String, _>("name").map_err(ser)?,
        age,
        row.try_get("created_at").map_err(ser)?,
    )
    .map_err(ser)
}

pub(crate) fn map_progress_row(row: &SqliteRow) -> Result<Progress, StorageError> {
    let id: ProgressId = row
        .try_get::<String, _>("id")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let user_id = UserRef::new(row.try_get::<String, _>("user_id").map_err(ser)?);

    Ok(Progress::from_persisted(
        id,
        user_id,
        row.try_get::<String, _>("age_group")
            .map_err(ser)?
            .parse()
            .map_err(ser)?,
        row.try_get::<String, _>("operation")
            .map_err(ser)?
            .parse()
            .map_err(ser)?,
        row.try_get::<String, _>("level")
            .map_err(ser)?
            .parse()
            .map_err(ser)?,
        u32_from_i64("score", row.try_get("score").map_err(ser)?)?,
        u32_from_i64("stars", row.try_get("stars").map_err(ser)?)?,
        u32_from_i64(
            "completed_exercises",
            row.try_get("completed_exercises").map_err(ser)?,
        )?,
        row.try_get("timestamp").map_err(ser)?,
    ))
}
