//! Inherent-const fallback machinery behind the probe macros.
//!
//! For each probe:
//! 1. a fallback trait provides `const HAS_X: bool = false`
//! 2. the fallback is implemented for `Detect<T>` for all `T`
//! 3. an inherent `const HAS_X: bool = true` exists for `Detect<T>` where
//!    `T` meets the probe's bound
//!
//! Resolving `Detect::<Concrete>::HAS_X` finds the inherent const when the
//! bound holds and the trait const otherwise.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! Inside `fn foo<T>()` the bound is not provable and every probe is `false`.

use core::marker::PhantomData;
use core::fmt::Display;
use core::ops::AddAssign;

use crate::capability::{
    MethodAllocator, MethodClear, MethodIndex, MethodMetadata, MethodOptions, MethodReset,
    MethodResize, MethodSize, MethodUpdate, MethodValue,
};
use crate::contract::{
    Axis, AxisVariant, Indexable, Sequence, SequenceOfAxis, SequenceOfAxisVariant, Storage,
    Transform,
};
use crate::sample::{Sample, Weight};
use crate::shape::{ArrayLike, Iterable, MapLike, VectorLike};

/// Detection wrapper for one type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Detection wrapper for a pair of types.
#[doc(hidden)]
pub struct DetectWith<T: ?Sized, U: ?Sized>(PhantomData<T>, PhantomData<U>);

/// Generate fallback trait + inherent const for one probe.
///
/// `T` (and `U` in the pair forms) may appear in the bound. `@with` needs a
/// sized `U`; `@with_unsized` is for bounds that accept any `U`.
macro_rules! impl_detect {
    ($name:ident => $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] { const [<$name:upper>]: bool = false; }
            impl<T: ?Sized> [<$name:camel Fallback>] for Detect<T> {}
            impl<T: ?Sized + $($bound)+> Detect<T> { pub const [<$name:upper>]: bool = true; }
        }
    };
    (@with $name:ident => $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] { const [<$name:upper>]: bool = false; }
            impl<T: ?Sized, U: ?Sized> [<$name:camel Fallback>] for DetectWith<T, U> {}
            impl<T: ?Sized + $($bound)+, U> DetectWith<T, U> {
                pub const [<$name:upper>]: bool = true;
            }
        }
    };
    (@with_unsized $name:ident => $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] { const [<$name:upper>]: bool = false; }
            impl<T: ?Sized, U: ?Sized> [<$name:camel Fallback>] for DetectWith<T, U> {}
            impl<T: ?Sized + $($bound)+, U: ?Sized> DetectWith<T, U> {
                pub const [<$name:upper>]: bool = true;
            }
        }
    };
}

// Operations
impl_detect!(has_method_value => MethodValue);
impl_detect!(has_method_options => MethodOptions);
impl_detect!(has_method_metadata => MethodMetadata);
impl_detect!(has_method_update => MethodUpdate);
impl_detect!(has_method_index => MethodIndex);
impl_detect!(has_method_size => MethodSize);
impl_detect!(has_method_clear => MethodClear);
impl_detect!(has_method_resize => MethodResize);
impl_detect!(has_method_reset => MethodReset);
impl_detect!(has_allocator => MethodAllocator);
impl_detect!(is_streamable => Display);
impl_detect!(@with has_method_value_with_convertible_return_type => MethodValue<Output: Into<U>>);
impl_detect!(@with_unsized has_operator_equal => PartialEq<U>);
impl_detect!(@with has_operator_radd => AddAssign<U>);

// Shapes
impl_detect!(is_vector_like => VectorLike);
impl_detect!(is_array_like => ArrayLike);
impl_detect!(is_map_like => MapLike);
impl_detect!(is_iterable => Iterable);

// Contracts
impl_detect!(is_axis => Axis);
impl_detect!(is_transform => Transform);
impl_detect!(is_storage => Storage);
impl_detect!(is_indexable => Indexable);
impl_detect!(is_axis_variant => AxisVariant);
impl_detect!(is_sequence => Sequence);
impl_detect!(is_sequence_of_axis => SequenceOfAxis);
impl_detect!(is_sequence_of_axis_variant => SequenceOfAxisVariant);

// Payloads
impl_detect!(is_weight => Weight);
impl_detect!(is_sample => Sample);
