//! Errors raised when validating field parameters.

use thiserror::Error;

/// Field parameter errors.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A parameter that must be strictly positive was not.
    #[error("invalid argument: `{name}` must be positive, got {value}")]
    InvalidArgument {
        /// The parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that a parameter is strictly positive. NaN is rejected.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        log::debug!("rejecting parameter `{}` = {}", name, value);
        Err(Error::InvalidArgument { name, value })
    }
}
