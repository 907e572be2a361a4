use lego_core::model::{Progress, UserRef};

use super::SqliteRepository;
use super::mapping::{db_err, map_progress_row};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn append_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO progress (
                    id, user_id, age_group, operation, level,
                    score, stars, completed_exercises, timestamp
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
        )
        .bind(progress.id().to_string())
        .bind(progress.user_id().as_str())
        .bind(progress.age_group().as_str())
        .bind(progress.operation().as_str())
        .bind(progress.level().as_str())
        .bind(i64::from(progress.score()))
        .bind(i64::from(progress.stars()))
        .bind(i64::from(progress.completed_exercises()))
        .bind(progress.timestamp())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn find_progress_by_user(
        &self,
        user_id: &UserRef,
    ) -> Result<Vec<Progress>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    id, user_id, age_group, operation, level,
                    score, stars, completed_exercises, timestamp
                FROM progress
                WHERE user_id = ?1
                ORDER BY rowid ASC
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_progress_row(&row)?);
        }
        Ok(out)
    }
}
