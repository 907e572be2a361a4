use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::UserId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("La edad debe estar entre 3 y 12 años")]
    InvalidAge(i64),

    #[error("El nombre no puede estar vacío")]
    EmptyName,
}

//
// ─── AGE ───────────────────────────────────────────────────────────────────────
//

/// A learner's age in years, always within `Age::MIN..=Age::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 12;

    /// # Errors
    ///
    /// Returns `UserError::InvalidAge` when `years` is outside 3..=12.
    pub fn new(years: i64) -> Result<Self, UserError> {
        u8::try_from(years)
            .ok()
            .filter(|y| (Self::MIN..=Self::MAX).contains(y))
            .map(Self)
            .ok_or(UserError::InvalidAge(years))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

//
// ─── USER ──────────────────────────────────────────────────────────────────────
//

/// A registered learner. Name and age together act as the natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    age: Age,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmptyName` if name is empty or whitespace-only.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        age: Age,
        created_at: DateTime<Utc>,
    ) -> Result<Self, UserError> {
        let name = normalize_name(name)?;
        Ok(Self {
            id,
            name,
            age,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> Age {
        self.age
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Trim a display name, rejecting blank input.
///
/// # Errors
///
/// Returns `UserError::EmptyName` if nothing is left after trimming.
pub fn normalize_name(name: impl Into<String>) -> Result<String, UserError> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
