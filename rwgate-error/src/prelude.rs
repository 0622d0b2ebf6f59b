//! Prelude module for rwgate-error
//!
//! Re-exports the types a consumer of this crate usually needs, so the
//! sibling crates can pull them in with a single `use`.

pub use core::{
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{codes, Error, ErrorCategory, ErrorSource, Result};
