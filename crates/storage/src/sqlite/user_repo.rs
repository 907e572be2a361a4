use lego_core::model::{Age, User, UserId};

use super::SqliteRepository;
use super::mapping::{db_err, map_user_row};
use crate::repository::{StorageError, UserRepository};

#[async_trait::async_trait]
impl UserRepository for SqliteRepository {
    async fn find_user(&self, name: &str, age: Age) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, name, age, created_at
            FROM users
            WHERE name = ?1 AND age = ?2
            ORDER BY rowid ASC
            LIMIT 1
            ",
        )
        .bind(name)
        .bind(i64::from(age.value()))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(map_user_row).transpose()
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, name, age, created_at
            FROM users WHERE id = ?1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(map_user_row).transpose()
    }

    async fn create_user(&self, user: &User) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, age, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(user.id().to_string())
        .bind(user.name())
        .bind(i64::from(user.age().value()))
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }
}
