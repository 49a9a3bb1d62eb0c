//! Error types for claim operations

use crate::ClaimNumber;
use thiserror::Error;

/// Errors that can occur while building or editing a claim collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// Claims must be numbered from 1 upwards
    #[error("Invalid claim number {0}: claims must be numbered from 1")]
    InvalidNumber(ClaimNumber),

    /// No claim with this number exists in the collection
    #[error("There is no claim numbered {0}")]
    NotFound(ClaimNumber),

    /// A cascade reached a claim that is already one of its own ancestors
    #[error("Claim {0} depends on itself through its dependents")]
    CyclicDependency(ClaimNumber),
}
