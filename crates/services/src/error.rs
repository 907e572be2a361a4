//! Shared error types for the services crate.

use thiserror::Error;

use lego_core::model::UserError;
use storage::repository::StorageError;

/// Errors emitted by `UserService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UserServiceError {
    #[error(transparent)]
    Invalid(#[from] UserError),
    #[error("Usuario no encontrado")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ExerciseService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseServiceError {
    #[error("no se pueden generar más de {max} ejercicios por solicitud (pedidos: {requested})")]
    TooMany { requested: u32, max: u32 },
}
