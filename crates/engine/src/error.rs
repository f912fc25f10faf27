//! The module contains the errors the engine can throw.
//!
//! Validation errors ([`InvalidMonth`], [`InvalidAmount`], [`InvalidName`])
//! are raised before anything is written. [`KeyNotFound`] is raised when a
//! referenced author does not exist. Everything coming from the store is
//! wrapped in [`Database`]; a stored row that cannot be decoded is an
//! [`InvalidType`], and per-type sums that do not fit an `i64` are a
//! [`TotalOverflow`].
//!
//!  [`InvalidMonth`]: EngineError::InvalidMonth
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidType`]: EngineError::InvalidType
//!  [`TotalOverflow`]: EngineError::TotalOverflow
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

use crate::BudgetType;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid budget type: {0}")]
    InvalidType(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Sum of {0} amounts overflows")]
    TotalOverflow(BudgetType),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// True for errors caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth(_) | Self::InvalidAmount(_) | Self::InvalidName(_)
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidMonth(a), Self::InvalidMonth(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidType(a), Self::InvalidType(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::TotalOverflow(a), Self::TotalOverflow(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
