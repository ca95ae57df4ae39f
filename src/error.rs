// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `InlineVec`.
//!
//! The only recoverable failure in this crate is a conversion input that
//! does not fit the fixed capacity. Out-of-range access is signalled by
//! `Option` ([`InlineVec::get`](crate::InlineVec::get)), and capacity
//! violations in the modifier set are programmer errors that panic.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fallible conversions into [`InlineVec`](crate::InlineVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input holds more elements than the fixed capacity (`N`).
    Full,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
        }
    }
}

impl CoreError for Error {}
