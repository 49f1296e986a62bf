//! Error taxonomy for subnet calculations.

use thiserror::Error;

/// Failures a calculation can report to its caller.
///
/// All variants are terminal, synchronous failures: no retry, no partial
/// result. An out-of-range target host index is deliberately NOT an error;
/// it produces a [`crate::models::TargetHost::OutOfRange`] soft result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid IP Address")]
    InvalidAddress,
    #[error("Only IPv4 is supported currently")]
    UnsupportedAddressFamily,
    #[error("CIDR must be between 0 and 32")]
    InvalidPrefixLength,
    #[error("Host index must be a non-negative integer")]
    InvalidHostIndex,
    #[error("Please enter an IP address")]
    EmptyInput,
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
