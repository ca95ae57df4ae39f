// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

impl<T, const N: usize> InlineVec<T, N> {
    /// Resizes the vector to `new_len`, cloning `value` into each new slot
    /// when growing.
    ///
    /// Shrinking drops the excess elements back to front. If a clone panics
    /// mid-grow, the panic propagates unmodified and `len` counts exactly
    /// the elements fully constructed before it.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > N`.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        assert!(
            new_len <= N,
            "requested length {new_len} exceeds fixed capacity {N}"
        );
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len < new_len {
            self.buf[self.len].write(value.clone());
            self.len += 1;
        }
    }

    /// Resizes the vector to `new_len`, filling new slots with values
    /// produced by `f` when growing.
    ///
    /// `resize_with(n, T::default)` is the default-constructing form of
    /// [`resize`](Self::resize) for types without a useful prototype value.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > N`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        assert!(
            new_len <= N,
            "requested length {new_len} exceeds fixed capacity {N}"
        );
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len < new_len {
            self.buf[self.len].write(f());
            self.len += 1;
        }
    }
}
