// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`InlineVec`](crate::InlineVec).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence of at most `N` elements; longer
//!   inputs fail with a descriptive error rather than truncating.
//!
//! Elements are written straight into uninitialized slots as they are
//! deserialized, so `T` needs no `Default` or `Clone` — only
//! `Deserialize` itself.

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for InlineVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(core::marker::PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = InlineVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = InlineVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            if out.try_push(elem).is_err() {
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {N})"
                )));
            }
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for InlineVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(core::marker::PhantomData))
    }
}
