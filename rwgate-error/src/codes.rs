// RWGate - rwgate-error
// Module: RWGate Error Codes
//
// Copyright (c) 2026 The RWGate Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error code constants used across the RWGate crates.
//!
//! Codes are grouped into blocks of one hundred per category so a code is
//! attributable to its category without consulting the error value.

// Runtime errors (1000-1099)

/// Generic runtime failure
pub const RUNTIME_ERROR: u16 = 1000;

// Concurrency errors (1100-1199)

/// A lock operation failed
pub const CONCURRENCY_LOCK_FAILURE: u16 = 1100;
/// A grant was released more times than it was acquired
pub const ILLEGAL_RELEASE: u16 = 1101;

// Unsupported operation errors (1200-1299)

/// The requested operation is not implemented
pub const UNSUPPORTED_OPERATION: u16 = 1200;

// State errors (1300-1399)

/// An object was observed in a state it must never reach
pub const INVALID_STATE: u16 = 1300;
