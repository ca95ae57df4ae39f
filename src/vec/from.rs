// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> From<[T; N]> for InlineVec<T, N> {
    /// Moves a full array into a vector with `len == N`. No element is
    /// cloned or dropped in the process.
    fn from(src: [T; N]) -> Self {
        let mut out = Self::new();
        let src = ManuallyDrop::new(src);
        // SAFETY: `src` is never dropped, so ownership of all `N` elements
        // transfers into `out.buf` via the bitwise copy; each value ends up
        // owned exactly once.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), out.as_mut_ptr(), N);
        }
        out.len = N;
        out
    }
}
