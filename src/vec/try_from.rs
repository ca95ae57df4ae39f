// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InlineVec};

impl<T: Clone, const N: usize> TryFrom<&[T]> for InlineVec<T, N> {
    type Error = Error;

    /// All-or-nothing: clones every element of `src`, or fails with
    /// [`Error::Full`] before cloning anything when `src` is too long.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        if src.len() > N {
            return Err(Error::Full);
        }
        let mut v = Self::new();
        for item in src {
            v.buf[v.len].write(item.clone());
            v.len += 1;
        }
        Ok(v)
    }
}
