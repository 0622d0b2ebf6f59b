//! Formal verification for the error types using Kani.
//!
//! These proofs only run with Kani and are isolated from normal compilation
//! and testing.

// Only compile Kani verification code when documentation is being generated
// or when explicitly running cargo kani. This prevents interference with
// coverage testing.
#[cfg(any(doc, kani))]
pub mod kani_verification {
    //! Kani proof harnesses for the error types.

    use crate::{codes, Error, ErrorCategory, ErrorSource};

    /// Verify that error construction preserves category, code and message
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(2))]
    pub fn verify_error_creation() {
        let error = Error::new(
            ErrorCategory::NotSupported,
            codes::UNSUPPORTED_OPERATION,
            "unsupported",
        );
        assert_eq!(error.code(), codes::UNSUPPORTED_OPERATION);
        assert_eq!(error.category(), ErrorCategory::NotSupported);
        assert_eq!(error.message(), "unsupported");
        assert!(error.is_unsupported());
    }
}

// Expose the verification module in docs but not for normal compilation
#[cfg(any(doc, kani))]
pub use kani_verification::*;
