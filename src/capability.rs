//! # Capability Traits
//!
//! One trait per named operation a histogram component may expose. A type
//! "has" an operation exactly when it implements the trait; the probes in
//! [`crate::detect`] turn that into a `bool`, the contracts in
//! [`crate::contract`] combine the traits into roles.
//!
//! Types opt in either by hand or by annotating their inherent impl with
//! `#[structural]`, which maps recognised method signatures onto these traits.
//!
//! ## Operations
//!
//! | Operation | Trait | Receiver |
//! |-----------|-------|----------|
//! | `value(arg)` | [`MethodValue`] | `&self` |
//! | `options()` | [`MethodOptions`] | `&self` |
//! | `metadata()` | [`MethodMetadata`] | `&self` |
//! | `update(arg)` | [`MethodUpdate`] | `&mut self` |
//! | `index(value)` | [`MethodIndex`] | `&self` |
//! | `size()` | [`MethodSize`] | `&self` |
//! | `clear()` | [`MethodClear`] | `&mut self` |
//! | `resize(n)` | [`MethodResize`] | `&mut self` |
//! | `reset(n)` | [`MethodReset`] | `&mut self` |
//! | `forward(x)` / `inverse(x)` | [`MethodForward`] / [`MethodInverse`] | `&self` |
//! | `get_allocator()` | [`MethodAllocator`] | `&self` |
//! | `new_in(allocator)` | [`NewIn`] | none |

/// Bin index type shared by axes.
pub type Index = i32;

// =============================================================================
// Numeric kinds
// =============================================================================

/// Integer types usable as a bin index or bin count.
pub trait Integral: Copy + Ord + core::fmt::Debug {
    /// Convert to [`Index`], saturating at its bounds.
    fn to_index(self) -> Index;
}

/// Integer and floating point types usable as coordinates.
pub trait Numeric: Copy + PartialOrd + core::fmt::Debug {}

macro_rules! impl_integral {
    (signed: $($t:ty),*) => {$(
        impl Integral for $t {
            #[inline]
            fn to_index(self) -> Index {
                Index::try_from(self).unwrap_or(if self < 0 { Index::MIN } else { Index::MAX })
            }
        }
        impl Numeric for $t {}
    )*};
    (unsigned: $($t:ty),*) => {$(
        impl Integral for $t {
            #[inline]
            fn to_index(self) -> Index {
                Index::try_from(self).unwrap_or(Index::MAX)
            }
        }
        impl Numeric for $t {}
    )*};
}

impl_integral!(signed: i8, i16, i32, i64, i128, isize);
impl_integral!(unsigned: u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {}
impl Numeric for f64 {}

// =============================================================================
// Accessors
// =============================================================================

/// `value(&self, arg) -> Output`: bin value lookup.
pub trait MethodValue {
    type Arg;
    type Output;

    fn value(&self, arg: Self::Arg) -> Self::Output;
}

/// `options(&self) -> Options`
pub trait MethodOptions {
    type Options;

    fn options(&self) -> Self::Options;
}

/// `metadata(&self) -> &Metadata`
pub trait MethodMetadata {
    type Metadata: ?Sized;

    fn metadata(&self) -> &Self::Metadata;
}

/// `update(&mut self, arg) -> Output`: grow to include a coordinate.
pub trait MethodUpdate {
    type Arg;
    type Output;

    fn update(&mut self, arg: Self::Arg) -> Self::Output;
}

/// `index(&self, value) -> Output`: coordinate to bin index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `index` operation",
    label = "missing `index(&self, value)`",
    note = "implement `MethodIndex` or declare `fn index(&self, x: V) -> I` in a `#[structural]` impl"
)]
pub trait MethodIndex {
    type Value;
    type Output;

    fn index(&self, value: Self::Value) -> Self::Output;
}

/// `size(&self) -> Output`: number of bins or elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `size` operation",
    label = "missing `size(&self)`",
    note = "implement `MethodSize` or declare `fn size(&self) -> N` in a `#[structural]` impl"
)]
pub trait MethodSize {
    type Output;

    fn size(&self) -> Self::Output;
}

// =============================================================================
// Mutators
// =============================================================================

/// `clear(&mut self)`
pub trait MethodClear {
    fn clear(&mut self);
}

/// `resize(&mut self, n)`: grow or shrink to `n` elements.
pub trait MethodResize {
    fn resize(&mut self, n: usize);
}

/// `reset(&mut self, n)`: discard content, then hold `n` default elements.
pub trait MethodReset {
    fn reset(&mut self, n: usize);
}

// =============================================================================
// Transforms
// =============================================================================

/// `forward(&self, x) -> Output`
pub trait MethodForward {
    type Arg;
    type Output;

    fn forward(&self, x: Self::Arg) -> Self::Output;
}

/// `inverse(&self, x) -> Output`
pub trait MethodInverse {
    type Arg;
    type Output;

    fn inverse(&self, x: Self::Arg) -> Self::Output;
}

// =============================================================================
// Allocator handle
// =============================================================================

/// `get_allocator(&self) -> Allocator`: the resource the value allocates from.
pub trait MethodAllocator {
    type Allocator: Clone;

    fn get_allocator(&self) -> Self::Allocator;
}

/// Construct an empty value that allocates from `allocator`.
pub trait NewIn: MethodAllocator + Sized {
    fn new_in(allocator: Self::Allocator) -> Self;
}

// =============================================================================
// Std containers
// =============================================================================

impl<T, const N: usize> MethodSize for [T; N] {
    type Output = usize;

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::*;
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::vec::Vec;

    impl<T> MethodSize for Vec<T> {
        type Output = usize;

        #[inline]
        fn size(&self) -> usize {
            self.len()
        }
    }

    impl<T> MethodClear for Vec<T> {
        #[inline]
        fn clear(&mut self) {
            Vec::clear(self)
        }
    }

    impl<T: Clone + Default> MethodResize for Vec<T> {
        #[inline]
        fn resize(&mut self, n: usize) {
            Vec::resize(self, n, T::default())
        }
    }

    impl<T> MethodSize for VecDeque<T> {
        type Output = usize;

        #[inline]
        fn size(&self) -> usize {
            self.len()
        }
    }

    impl<T> MethodClear for VecDeque<T> {
        #[inline]
        fn clear(&mut self) {
            VecDeque::clear(self)
        }
    }

    impl<T: Clone + Default> MethodResize for VecDeque<T> {
        #[inline]
        fn resize(&mut self, n: usize) {
            VecDeque::resize(self, n, T::default())
        }
    }

    impl<K, V> MethodSize for BTreeMap<K, V> {
        type Output = usize;

        #[inline]
        fn size(&self) -> usize {
            self.len()
        }
    }

    impl<K, V> MethodClear for BTreeMap<K, V> {
        #[inline]
        fn clear(&mut self) {
            BTreeMap::clear(self)
        }
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::*;
    use std::collections::HashMap;

    impl<K, V, S> MethodSize for HashMap<K, V, S> {
        type Output = usize;

        #[inline]
        fn size(&self) -> usize {
            self.len()
        }
    }

    impl<K, V, S> MethodClear for HashMap<K, V, S> {
        #[inline]
        fn clear(&mut self) {
            HashMap::clear(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_index_saturates() {
        assert_eq!(5_u8.to_index(), 5);
        assert_eq!((-3_i64).to_index(), -3);
        assert_eq!(u64::MAX.to_index(), Index::MAX);
        assert_eq!(i128::MIN.to_index(), Index::MIN);
    }

    #[test]
    fn test_vec_operations() {
        let mut v = vec![1_u8, 2, 3];
        assert_eq!(MethodSize::size(&v), 3);
        MethodResize::resize(&mut v, 5);
        assert_eq!(v, [1, 2, 3, 0, 0]);
        MethodClear::clear(&mut v);
        assert!(v.is_empty());
    }

    #[test]
    fn test_array_size() {
        assert_eq!(MethodSize::size(&[0.5_f32; 4]), 4);
    }
}
