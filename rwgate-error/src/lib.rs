// RWGate - rwgate-error
// Module: RWGate Error Handling
//
// Copyright (c) 2026 The RWGate Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! RWGate error handling library
//!
//! This library provides the error handling system shared by the RWGate
//! crates. Errors are categorized, carry a numeric code from [`codes`], and
//! hold a static message, so they stay `Copy` and allocation-free.
//!
//! # Usage
//!
//! ```
//! use rwgate_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::NotSupported,
//!     codes::UNSUPPORTED_OPERATION,
//!     "timed acquisition is not implemented",
//! );
//! assert!(error.is_unsupported());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), test))]
extern crate std;

/// Error codes for the RWGate crates
pub mod codes;
/// Error and error handling types
pub mod errors;

pub mod prelude;

// Include verification module conditionally, but exclude during coverage builds
#[cfg(all(not(coverage), doc))]
pub mod verify;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for RWGate operations.
///
/// This type alias uses [`Error`] as the error type. It is suitable for
/// `no_std` environments as the error carries no allocation.
pub type Result<T> = core::result::Result<T, Error>;
