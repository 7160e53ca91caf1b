//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when a money value cannot be parsed or is out of range.
//! - [`InvalidPeriod`] returned when a `YYYY-MM` string is malformed.
//! - [`Validation`] returned when user input is rejected at an entry point.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidPeriod`]: EngineError::InvalidPeriod
//!  [`Validation`]: EngineError::Validation
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("{0}")]
    Validation(String),
}
