// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inline-vec`
//!
//! A `no_std`, fixed-capacity vector whose elements live inline in the
//! container itself, with manually managed element lifetimes.
//!
//! The core type, [`InlineVec<T, N>`], embeds storage for exactly `N`
//! elements directly in its own footprint and tracks a logical length
//! `len ∈ 0..=N`. Only the prefix `[0..len)` holds live elements; the tail
//! is raw uninitialized memory that is never default-constructed, never
//! read, and never dropped. Elements are constructed exactly when pushed and
//! destroyed exactly when popped, truncated, cleared, or the container is
//! dropped.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know the maximum element count at compile time.
//! - Heap allocation is forbidden or too slow for the path in question.
//! - You want vector-like ergonomics (indexing, push/pop, resize,
//!   iteration) with a hard, compile-time capacity ceiling.
//!
//! It may not be the best fit if:
//!
//! - You need the capacity to grow at runtime: prefer `Vec` (in `std`) or
//!   another growable container. Capacity here is a hard limit by design,
//!   not a soft one.
//! - Capacities or element types are large enough that moving the container
//!   by value (which moves the whole `N`-slot buffer) hurts; pass it by
//!   reference in hot code.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`InlineVec::<T, N>::CAPACITY == N`)
//!   and `N` must be at least 1; `N == 0` is rejected at compile time.
//! - No heap allocations are performed, ever. There is no reallocation, so
//!   elements are never relocated behind the caller's back.
//! - `T` needs no blanket bounds. Individual operations require only the
//!   capability they use: `T: Clone` for cloning, `resize`, and slice
//!   conversion; `T: Default` only where the caller reaches for it via
//!   [`InlineVec::resize_with`].
//! - Element access comes in two deliberate tiers:
//!   - **Checked**: [`InlineVec::get`] / [`InlineVec::get_mut`] return
//!     `None` past the live prefix — the only recoverable out-of-range
//!     signal in the crate.
//!   - **Unchecked**: [`InlineVec::get_unchecked`] /
//!     [`InlineVec::get_unchecked_mut`] are `unsafe` and zero-overhead; the
//!     caller promises `index < len`.
//!   Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds, exactly like
//!   built-in slices.
//! - Capacity violations are **programmer errors**, not recoverable
//!   conditions: [`InlineVec::push`] and [`InlineVec::resize`] panic past
//!   capacity. [`InlineVec::try_push`] is the non-panicking form and hands
//!   the element back on a full vector. Nothing silently truncates.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `InlineVec<T, N>`.
//!   - Serializes as a plain sequence of the live elements; deserialization
//!     fails on inputs longer than `N`.
//!
//! ## Example
//!
//! ```rust
//! use inline_vec::InlineVec;
//!
//! let mut v: InlineVec<String, 4> = InlineVec::new();
//! v.push("a".to_string());
//! v.push("b".to_string());
//! assert_eq!(v.as_slice(), ["a", "b"]);
//! assert_eq!(v.pop().as_deref(), Some("b"));
//! assert_eq!(v.capacity(), 4);
//! ```
//!
//! See [`InlineVec`] for detailed behavior, including the storage
//! invariants, panic conditions, and iteration semantics.

#![cfg_attr(not(test), no_std)]

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::InlineVec;
