//! Prelude module for rwgate-sync
//!
//! This module provides a unified set of imports for the crate's modules
//! and re-exports the public surface for downstream users.

// Core imports
pub use core::fmt;

// Std imports; blocking waits and captured backtraces make this a std-only
// crate.
pub use std::{backtrace::Backtrace, cell::Cell, sync::Arc, time::Duration};

// Third-party stack
pub use log::{trace, warn};
pub use parking_lot::{Condvar, Mutex};

// Re-export from rwgate-error
pub use rwgate_error::{codes, Error, ErrorCategory, Result};

// Re-export from this crate
pub use crate::{
    gate::{GateOptions, ReaderWriterGate},
    handle::{ReadHandle, WriteHandle},
};
