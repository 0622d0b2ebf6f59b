// RWGate - rwgate-error
// Module: RWGate Error Types
//
// Copyright (c) 2026 The RWGate Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for the RWGate crates.
//!
//! [`Error`] is `Copy` and allocation-free: it pairs a category and a
//! numeric code from [`crate::codes`] with a static message.

use core::fmt;

use crate::codes;

/// `Error` categories for RWGate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Runtime errors (general)
    Runtime = 1,
    /// Concurrency errors
    Concurrency = 2,
    /// Not supported operation errors
    NotSupported = 3,
    /// Invalid state errors
    InvalidState = 4,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// RWGate `Error` type
///
/// This is the main error type for the RWGate crates. It provides
/// categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code: u16,
    /// `Error` message
    pub message: &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an unsupported-operation error.
    #[must_use]
    pub const fn unsupported_operation(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::NotSupported,
            codes::UNSUPPORTED_OPERATION,
            message,
        )
    }

    /// Create an invalid-state error.
    #[must_use]
    pub const fn invalid_state(message: &'static str) -> Self {
        Self::new(ErrorCategory::InvalidState, codes::INVALID_STATE, message)
    }

    /// Create a concurrency error.
    #[must_use]
    pub const fn concurrency_error(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Concurrency,
            codes::CONCURRENCY_LOCK_FAILURE,
            message,
        )
    }

    /// Check if this is an unsupported-operation error
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.category == ErrorCategory::NotSupported
    }

    /// Check if this is a concurrency error
    #[must_use]
    pub fn is_concurrency_error(&self) -> bool {
        self.category == ErrorCategory::Concurrency
    }

    /// Check if this is an invalid-state error
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        self.category == ErrorCategory::InvalidState
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}] Error {}: {}",
            self.category, self.code, self.message
        )
    }
}

impl core::error::Error for Error {}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::new(
            ErrorCategory::Concurrency,
            codes::CONCURRENCY_LOCK_FAILURE,
            "lock failure",
        );
        assert_eq!(error.category, ErrorCategory::Concurrency);
        assert_eq!(error.code, codes::CONCURRENCY_LOCK_FAILURE);
        assert_eq!(error.message, "lock failure");
    }

    #[test]
    fn test_error_helpers() {
        let error = Error::unsupported_operation("timed acquisition is not implemented");
        assert!(error.is_unsupported());
        assert_eq!(error.code, codes::UNSUPPORTED_OPERATION);

        let error = Error::invalid_state("counters out of range");
        assert!(error.is_invalid_state());

        let error = Error::concurrency_error("lock failure");
        assert!(error.is_concurrency_error());
    }

    #[test]
    fn test_error_is_copy() {
        let error = Error::unsupported_operation("timed acquisition is not implemented");
        let copied = error;
        // Both copies stay usable.
        assert_eq!(error, copied);
    }

    #[test]
    fn test_error_display() {
        let error = Error::unsupported_operation("timed acquisition is not implemented");
        let rendered = std::format!("{error}");
        assert!(rendered.contains("NotSupported"));
        assert!(rendered.contains("1200"));
        assert!(rendered.contains("timed acquisition is not implemented"));
    }

    #[test]
    fn test_error_source_accessors() {
        let error = Error::invalid_state("counters out of range");
        let source: &dyn ErrorSource = &error;
        assert_eq!(source.code(), codes::INVALID_STATE);
        assert_eq!(source.message(), "counters out of range");
        assert_eq!(source.category(), ErrorCategory::InvalidState);
    }
}
