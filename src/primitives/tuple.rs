//! Small tuple utilities and uniform size queries.
//!
//! The per-arity impls (up to 8 elements) are generated by `impl_tuples!`.
//! A slice or `Last` request outside a tuple's arity has no impl, so it is
//! rejected when the program is built.

use super::qualifier::{Qualified, Value};

/// Implemented by tuples; `LEN` is the element count.
pub trait Tuple {
    const LEN: usize;
}

/// Implemented by types whose length is part of the type (tuples, arrays).
pub trait FixedLength {
    const LEN: usize;
}

/// Last element of a non-empty tuple.
pub trait Last {
    type Last;

    fn last(self) -> Self::Last;
}

/// Type of the last element of tuple `T`.
pub type LastOf<T> = <T as Last>::Last;

/// `COUNT` consecutive elements starting at `BEGIN`, in order.
///
/// ```compile_fail
/// use histo_caps::primitives::tuple_slice;
///
/// // (1, 2, 3, 4) has no elements at positions 3..5
/// let _ = tuple_slice::<3, 2, _>((1, 2, 3, 4));
/// ```
pub trait TupleSlice<const BEGIN: usize, const COUNT: usize> {
    type Out;

    fn slice(self) -> Self::Out;
}

/// Slice a tuple: `tuple_slice::<1, 2, _>((1, 2, 3, 4)) == (2, 3)`.
#[inline]
pub fn tuple_slice<const BEGIN: usize, const COUNT: usize, T>(tuple: T) -> T::Out
where
    T: TupleSlice<BEGIN, COUNT>,
{
    tuple.slice()
}

/// Element count, answered at compile time for fixed-length shapes and at
/// runtime for resizable ones.
pub trait GetSize {
    fn get_size(&self) -> usize;
}

/// Number of elements in `container`.
#[inline]
pub fn get_size<C: GetSize + ?Sized>(container: &C) -> usize {
    container.get_size()
}

macros::impl_tuples!(8);

impl<T, const N: usize> FixedLength for [T; N] {
    const LEN: usize = N;
}

impl<T, const N: usize> GetSize for [T; N] {
    #[inline]
    fn get_size(&self) -> usize {
        <Self as FixedLength>::LEN
    }
}

impl<T> GetSize for [T] {
    #[inline]
    fn get_size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "alloc")]
impl<T> GetSize for alloc::vec::Vec<T> {
    #[inline]
    fn get_size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "alloc")]
impl<T> GetSize for alloc::collections::VecDeque<T> {
    #[inline]
    fn get_size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_len() {
        assert_eq!(<() as Tuple>::LEN, 0);
        assert_eq!(<(u8,) as Tuple>::LEN, 1);
        assert_eq!(<(u8, char, f64) as Tuple>::LEN, 3);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8) as Tuple>::LEN, 8);
    }

    #[test]
    fn test_last() {
        assert_eq!((1, 'x', 3_i64).last(), 3_i64);
        let last: LastOf<(i32, char, i64)> = 5_i64;
        assert_eq!(last, 5);
    }

    #[test]
    fn test_slice_edges() {
        assert_eq!(tuple_slice::<0, 0, _>((1, 2)), ());
        assert_eq!(tuple_slice::<0, 2, _>((1, 2)), (1, 2));
        assert_eq!(tuple_slice::<2, 1, _>((1, 'b', "c")), ("c",));
    }

    #[test]
    fn test_get_size_fixed_and_dynamic() {
        assert_eq!(get_size(&(0, 0)), 2);
        assert_eq!(get_size(&[0; 4]), 4);
        assert_eq!(get_size(&[1, 2, 3][..]), 3);
    }
}
