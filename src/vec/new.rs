// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> InlineVec<T, N> {
    // Referenced from `new` so that monomorphizing any constructor with
    // `N == 0` fails to compile. Every construction path routes through
    // `new`.
    const CAPACITY_IS_NONZERO: () = assert!(N > 0, "InlineVec requires a capacity of at least 1");

    /// Constructs an empty vector.
    ///
    /// No slot is initialized; the backing buffer stays raw memory until
    /// elements are pushed.
    #[inline]
    pub const fn new() -> Self {
        let () = Self::CAPACITY_IS_NONZERO;
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `count` clones of `elem`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    pub fn from_elem(elem: T, count: usize) -> Self
    where
        T: Clone,
    {
        assert!(
            count <= N,
            "requested length {count} exceeds fixed capacity {N}"
        );
        let mut v = Self::new();
        v.resize(count, elem);
        v
    }
}

impl<T, const N: usize> Default for InlineVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::InlineVec;

    #[test]
    fn test_new_and_default_are_empty() {
        let v: InlineVec<String, 4> = InlineVec::new();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 4);

        let d: InlineVec<String, 4> = InlineVec::default();
        assert!(d.is_empty());
    }

    #[test]
    fn test_new_requires_no_capabilities() {
        // Neither Clone nor Default is needed to construct or fill.
        struct Opaque(#[allow(dead_code)] u8);
        let mut v: InlineVec<Opaque, 2> = InlineVec::new();
        v.push(Opaque(1));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_from_elem_clones_count_elements() {
        let v: InlineVec<String, 4> = InlineVec::from_elem("x".to_string(), 3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), ["x", "x", "x"]);
    }

    #[test]
    fn test_from_elem_zero_is_empty() {
        let v: InlineVec<i32, 4> = InlineVec::from_elem(9, 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_from_elem_up_to_capacity() {
        let v: InlineVec<i32, 4> = InlineVec::from_elem(7, 4);
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    #[should_panic(expected = "exceeds fixed capacity")]
    fn test_from_elem_past_capacity_panics() {
        let _ = InlineVec::<i32, 4>::from_elem(0, 5);
    }
}
