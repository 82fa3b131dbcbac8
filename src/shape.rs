//! # Container Shapes
//!
//! A container states its shape once, through [`Shaped::Shape`]. Because a
//! type has exactly one `Shape`, it can be vector-like, array-like or
//! map-like, but never two of them.
//!
//! - [`VectorLike`]: positional access, `size`, `clear`, `resize`.
//! - [`ArrayLike`]: positional access, length fixed by the type, no resize.
//! - [`MapLike`]: keyed lookup and lookup-or-insert, `size`, `clear`.
//! - [`Iterable`]: `&T` can be iterated. Holds alongside the other three.
//!
//! A map is only map-like when its key type satisfies the map's own
//! contract: `Ord` for `BTreeMap`, `Hash + Eq` for `HashMap`.

use core::ops::Index;

use crate::capability::{MethodClear, MethodResize, MethodSize};
use crate::primitives::FixedLength;

/// Shape tag: resizable, positionally indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorShape;

/// Shape tag: fixed length, positionally indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayShape;

/// Shape tag: associative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapShape;

/// Runtime view of a shape tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Vector,
    Array,
    Map,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::VectorShape {}
    impl Sealed for super::ArrayShape {}
    impl Sealed for super::MapShape {}
}

/// One of [`VectorShape`], [`ArrayShape`], [`MapShape`].
pub trait ShapeTag: sealed::Sealed {
    const SHAPE: Shape;
}

impl ShapeTag for VectorShape {
    const SHAPE: Shape = Shape::Vector;
}

impl ShapeTag for ArrayShape {
    const SHAPE: Shape = Shape::Array;
}

impl ShapeTag for MapShape {
    const SHAPE: Shape = Shape::Map;
}

/// Declares which container shape a type has.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare a container shape",
    label = "no `Shaped` impl",
    note = "implement `Shaped` with `type Shape = VectorShape`, `ArrayShape` or `MapShape`"
)]
pub trait Shaped {
    type Shape: ShapeTag;
}

/// Shape of `T` as a value.
///
/// ```
/// use histo_caps::shape::{classify, Shape};
///
/// assert_eq!(classify::<Vec<u8>>(), Shape::Vector);
/// assert_eq!(classify::<[u8; 3]>(), Shape::Array);
/// ```
#[inline]
pub const fn classify<T: Shaped + ?Sized>() -> Shape {
    <T::Shape as ShapeTag>::SHAPE
}

// =============================================================================
// Keyed access
// =============================================================================

/// Associative lookup by key.
pub trait KeyedAccess {
    type Key;
    type Element;

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Element>;

    /// Element at `key`, inserting `make()` first if absent.
    fn lookup_or_insert_with<F>(&mut self, key: Self::Key, make: F) -> &mut Self::Element
    where
        F: FnOnce() -> Self::Element;
}

// =============================================================================
// Shape classes
// =============================================================================

/// Resizable, positionally indexed container.
pub trait VectorLike:
    Shaped<Shape = VectorShape> + Index<usize> + MethodSize<Output = usize> + MethodClear + MethodResize
{
}

impl<T> VectorLike for T where
    T: ?Sized
        + Shaped<Shape = VectorShape>
        + Index<usize>
        + MethodSize<Output = usize>
        + MethodClear
        + MethodResize
{
}

/// Fixed-length, positionally indexed container.
pub trait ArrayLike: Shaped<Shape = ArrayShape> + Index<usize> + FixedLength {}

impl<T> ArrayLike for T where T: ?Sized + Shaped<Shape = ArrayShape> + Index<usize> + FixedLength {}

/// Associative container.
pub trait MapLike:
    Shaped<Shape = MapShape> + KeyedAccess + MethodSize<Output = usize> + MethodClear
{
}

impl<T> MapLike for T where
    T: ?Sized + Shaped<Shape = MapShape> + KeyedAccess + MethodSize<Output = usize> + MethodClear
{
}

/// Borrowing iteration: `for x in &container`.
pub trait Iterable {}

impl<T: ?Sized> Iterable for T where for<'a> &'a T: IntoIterator {}

// =============================================================================
// Std containers
// =============================================================================

impl<T, const N: usize> Shaped for [T; N] {
    type Shape = ArrayShape;
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::*;
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::vec::Vec;

    impl<T> Shaped for Vec<T> {
        type Shape = VectorShape;
    }

    impl<T> Shaped for VecDeque<T> {
        type Shape = VectorShape;
    }

    impl<K, V> Shaped for BTreeMap<K, V> {
        type Shape = MapShape;
    }

    impl<K: Ord, V> KeyedAccess for BTreeMap<K, V> {
        type Key = K;
        type Element = V;

        #[inline]
        fn lookup(&self, key: &K) -> Option<&V> {
            self.get(key)
        }

        #[inline]
        fn lookup_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, make: F) -> &mut V {
            self.entry(key).or_insert_with(make)
        }
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::*;
    use core::hash::{BuildHasher, Hash};
    use std::collections::HashMap;

    impl<K, V, S> Shaped for HashMap<K, V, S> {
        type Shape = MapShape;
    }

    impl<K: Hash + Eq, V, S: BuildHasher> KeyedAccess for HashMap<K, V, S> {
        type Key = K;
        type Element = V;

        #[inline]
        fn lookup(&self, key: &K) -> Option<&V> {
            self.get(key)
        }

        #[inline]
        fn lookup_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, make: F) -> &mut V {
            self.entry(key).or_insert_with(make)
        }
    }
}
