//! # Contracts
//!
//! Roles built from the capability traits. Each role is a trait with a
//! blanket impl, so a type plays the role as soon as it has the operations;
//! nothing has to name the role.
//!
//! | Role | Requires |
//! |------|----------|
//! | [`Axis`] | `index(value) -> integer` and `size() -> integer` |
//! | [`Transform`] | `forward(n) -> n` and `inverse(n) -> n` |
//! | [`Indexable`] | element access through the container's shape |
//! | [`Storage`] | positional [`Indexable`] plus `reset(n)` |
//! | [`AxisVariant`] | any [`Variant`] |
//!
//! `Variant` only has inherent `index`/`size`, so a variant is an axis
//! variant and never an `Axis` itself.

use core::ops::Index;

use crate::capability::{
    Integral, MethodForward, MethodIndex, MethodInverse, MethodReset, MethodSize, Numeric,
};
use crate::primitives::FixedLength;
use crate::shape::{ArrayShape, KeyedAccess, MapShape, ShapeTag, Shaped, VectorShape};
use crate::variant::Variant;

// =============================================================================
// Axis / Transform
// =============================================================================

/// Maps a coordinate to an integral bin index and knows its bin count.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an axis",
    label = "needs both `index(&self, value)` and `size(&self)` with integral results",
    note = "an axis must provide `MethodIndex` and `MethodSize`; either alone is not enough"
)]
pub trait Axis: MethodIndex<Output: Integral> + MethodSize<Output: Integral> {}

impl<T> Axis for T where T: ?Sized + MethodIndex<Output: Integral> + MethodSize<Output: Integral> {}

/// Invertible numeric coordinate mapping.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a transform",
    label = "needs numeric `forward(&self, x)` and `inverse(&self, x)`"
)]
pub trait Transform:
    MethodForward<Arg: Numeric, Output: Numeric> + MethodInverse<Arg: Numeric, Output: Numeric>
{
}

impl<T> Transform for T where
    T: ?Sized
        + MethodForward<Arg: Numeric, Output: Numeric>
        + MethodInverse<Arg: Numeric, Output: Numeric>
{
}

// =============================================================================
// Indexable
// =============================================================================

/// Element access for containers with shape tag `Self`.
///
/// Implemented on the tags so that each shape brings its own rule without
/// the rules overlapping.
pub trait Access<T: ?Sized>: ShapeTag {
    type Key;
    type Element: ?Sized;

    fn element<'a>(container: &'a T, key: &Self::Key) -> Option<&'a Self::Element>;
}

impl<T> Access<T> for VectorShape
where
    T: ?Sized + Index<usize> + MethodSize<Output = usize>,
{
    type Key = usize;
    type Element = <T as Index<usize>>::Output;

    #[inline]
    fn element<'a>(container: &'a T, key: &usize) -> Option<&'a <T as Index<usize>>::Output> {
        (*key < container.size()).then(|| &container[*key])
    }
}

impl<T> Access<T> for ArrayShape
where
    T: ?Sized + Index<usize> + FixedLength,
{
    type Key = usize;
    type Element = T::Output;

    #[inline]
    fn element<'a>(container: &'a T, key: &usize) -> Option<&'a T::Output> {
        (*key < T::LEN).then(|| &container[*key])
    }
}

impl<T> Access<T> for MapShape
where
    T: ?Sized + KeyedAccess,
{
    type Key = T::Key;
    type Element = T::Element;

    #[inline]
    fn element<'a>(container: &'a T, key: &T::Key) -> Option<&'a T::Element> {
        container.lookup(key)
    }
}

/// Element access by position or key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not indexable",
    label = "no element access for this shape",
    note = "vector-like and array-like containers index by position; map-like containers need a key that satisfies the map's ordering or hashing contract"
)]
pub trait Indexable {
    type Key;
    type Element: ?Sized;

    fn element(&self, key: &Self::Key) -> Option<&Self::Element>;
}

impl<T> Indexable for T
where
    T: ?Sized + Shaped,
    T::Shape: Access<T>,
{
    type Key = <T::Shape as Access<T>>::Key;
    type Element = <T::Shape as Access<T>>::Element;

    #[inline]
    fn element(&self, key: &Self::Key) -> Option<&Self::Element> {
        <T::Shape as Access<T>>::element(self, key)
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Positionally indexed bin storage that can be reset to `n` empty bins.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a storage",
    label = "needs positional element access and `reset(&mut self, n)`"
)]
pub trait Storage: Indexable<Key = usize> + MethodReset {}

impl<T> Storage for T where T: ?Sized + Indexable<Key = usize> + MethodReset {}

// =============================================================================
// Axis variants
// =============================================================================

mod sealed {
    pub trait Sealed {}
    impl<A> Sealed for crate::variant::Variant<A> {}
}

/// Implemented by every [`Variant`], whatever its alternatives.
pub trait AxisVariant: sealed::Sealed {
    type Alternatives;
}

impl<A> AxisVariant for Variant<A> {
    type Alternatives = A;
}

// =============================================================================
// Sequences
// =============================================================================

/// Ordered homogeneous sequence.
pub trait Sequence {
    type Element;
}

impl<T, const N: usize> Sequence for [T; N] {
    type Element = T;
}

impl<T> Sequence for [T] {
    type Element = T;
}

#[cfg(feature = "alloc")]
impl<T> Sequence for alloc::vec::Vec<T> {
    type Element = T;
}

#[cfg(feature = "alloc")]
impl<T> Sequence for alloc::collections::VecDeque<T> {
    type Element = T;
}

/// Sequence of axes.
pub trait SequenceOfAxis: Sequence<Element: Axis> {}

impl<T> SequenceOfAxis for T where T: ?Sized + Sequence<Element: Axis> {}

/// Sequence of axis variants.
pub trait SequenceOfAxisVariant: Sequence<Element: AxisVariant> {}

impl<T> SequenceOfAxisVariant for T where T: ?Sized + Sequence<Element: AxisVariant> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;

    struct Edges;

    impl MethodIndex for Edges {
        type Value = f64;
        type Output = i32;
        fn index(&self, x: f64) -> i32 {
            x.floor() as i32
        }
    }

    impl MethodSize for Edges {
        type Output = u32;
        fn size(&self) -> u32 {
            10
        }
    }

    fn axis<A: Axis>(a: &A, x: A::Value) -> (<A as MethodIndex>::Output, <A as MethodSize>::Output) {
        (a.index(x), a.size())
    }

    #[test]
    fn test_axis_bound() {
        assert_eq!(axis(&Edges, 2.5), (2, 10));
    }

    #[test]
    fn test_indexable_by_shape() {
        let v = vec![1, 2, 3];
        assert_eq!(v.element(&1), Some(&2));
        assert_eq!(v.element(&3), None);

        let a = [1.5, 2.5];
        assert_eq!(Indexable::element(&a, &0), Some(&1.5));
        assert_eq!(Indexable::element(&a, &2), None);

        let mut m = BTreeMap::new();
        m.insert('x', 7);
        assert_eq!(m.element(&'x'), Some(&7));
        assert_eq!(m.element(&'y'), None);
    }
}
