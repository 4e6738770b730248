// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for stack operations.

/// A result type alias for stack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a stack operation can fail.
///
/// A full stack is not an error: it grows instead, and only a failed
/// growth shows up here, as [`Error::AllocationFailure`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Backing storage could not be obtained.
    #[error("allocation failed: request for {requested} could not be satisfied")]
    AllocationFailure {
        /// Slots for buffer growth, bytes for a copied-in value.
        requested: usize,
    },

    /// Pop or peek on an empty stack.
    #[error("stack underflow: stack is empty")]
    Underflow,

    /// A caller supplied a value the stack cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an invalid-argument error with a message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` if this is an underflow.
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow)
    }

    /// Returns `true` if this is an allocation failure.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }

    /// Returns `true` if this is an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::Underflow.to_string(),
            "stack underflow: stack is empty"
        );
        assert_eq!(
            Error::invalid_argument("capacity must be greater than zero").to_string(),
            "invalid argument: capacity must be greater than zero"
        );
        assert_eq!(
            Error::AllocationFailure { requested: 8 }.to_string(),
            "allocation failed: request for 8 could not be satisfied"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(Error::Underflow.is_underflow());
        assert!(!Error::Underflow.is_allocation_failure());
        assert!(Error::AllocationFailure { requested: 1 }.is_allocation_failure());
        assert!(Error::invalid_argument("x").is_invalid_argument());
    }
}
