//! # Probes
//!
//! `bool` answers to "does this concrete type have that capability",
//! usable in `const` context. A missing capability is `false`, never a
//! build error.
//!
//! ```
//! use histo_caps::{has_method_size, is_axis, is_vector_like, probe};
//!
//! assert!(has_method_size!(Vec<u8>));
//! assert!(is_vector_like!(Vec<u8>));
//! assert!(!is_axis!(Vec<u8>));
//!
//! const COPY: bool = probe!(u8: Copy);
//! assert!(COPY);
//! assert!(!probe!(String: Copy));
//! ```
//!
//! ## Probes
//!
//! | Macro | True when |
//! |-------|-----------|
//! | `has_method_value!(T)` | `T: MethodValue` |
//! | `has_method_value_with_convertible_return_type!(T, V)` | ... and its `Output: Into<V>` |
//! | `has_method_options!(T)` / `has_method_metadata!(T)` / `has_method_update!(T)` | the matching trait |
//! | `has_method_index!(T)` / `has_method_size!(T)` | the matching trait |
//! | `has_method_clear!(T)` / `has_method_resize!(T)` / `has_method_reset!(T)` | the matching trait |
//! | `has_allocator!(T)` | `T: MethodAllocator` |
//! | `has_operator_equal!(T, U)` | `T: PartialEq<U>` (`U` defaults to `T`) |
//! | `has_operator_radd!(T, U)` | `T: AddAssign<U>` (`U` defaults to `T`) |
//! | `is_streamable!(T)` | `T: Display` |
//! | `is_vector_like!` / `is_array_like!` / `is_map_like!` / `is_iterable!` | shape classes |
//! | `is_axis!` / `is_transform!` / `is_storage!` / `is_indexable!` | contracts |
//! | `is_axis_variant!` / `is_sequence_of_axis!` / `is_sequence_of_axis_variant!` / `is_sequence_of_any_axis!` | variant and sequence contracts |
//! | `is_weight!` / `is_sample!` | payload wrappers |
//! | `probe!(T: Bounds)` | any bound |
//!
//! ## Limitation
//!
//! Probes see only what is provable where they are expanded. In a generic
//! function every probe on the type parameter is `false`; generic code
//! should use the capability traits as bounds instead.

pub mod autoref;

#[doc(hidden)]
pub use autoref::*;

/// Expand a probe against `Detect<T>` or `DetectWith<T, U>`.
#[doc(hidden)]
#[macro_export]
macro_rules! __detect {
    ($Fallback:ident, $CONST:ident, $T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::$Fallback as _;
        $crate::detect::Detect::<$T>::$CONST
    }};
    ($Fallback:ident, $CONST:ident, $T:ty, $U:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::$Fallback as _;
        $crate::detect::DetectWith::<$T, $U>::$CONST
    }};
}

/// Check if a concrete type satisfies a bound.
///
/// ```
/// use histo_caps::probe;
///
/// trait Tagged {}
/// impl Tagged for i32 {}
///
/// assert!(probe!(i32: Tagged));
/// assert!(!probe!(String: Tagged));
/// assert!(probe!(String: Clone + Default));
/// ```
#[macro_export]
macro_rules! probe {
    ($T:ty : $($bound:tt)+) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $($bound)+> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

// =============================================================================
// Operations
// =============================================================================

/// `T` has `value(&self, arg)`.
#[macro_export]
macro_rules! has_method_value {
    ($T:ty) => { $crate::__detect!(HasMethodValueFallback, HAS_METHOD_VALUE, $T) };
}

/// `T` has `value(&self, arg)` and its result converts into `V`.
///
/// ```
/// use histo_caps::capability::MethodValue;
/// use histo_caps::has_method_value_with_convertible_return_type as convertible;
///
/// struct Letters;
/// impl MethodValue for Letters {
///     type Arg = i32;
///     type Output = char;
///     fn value(&self, i: i32) -> char { (b'a' + i as u8) as char }
/// }
///
/// assert!(convertible!(Letters, u32));
/// assert!(!convertible!(Letters, u8));
/// ```
#[macro_export]
macro_rules! has_method_value_with_convertible_return_type {
    ($T:ty, $V:ty) => {
        $crate::__detect!(
            HasMethodValueWithConvertibleReturnTypeFallback,
            HAS_METHOD_VALUE_WITH_CONVERTIBLE_RETURN_TYPE,
            $T,
            $V
        )
    };
}

/// `T` has `options(&self)`.
#[macro_export]
macro_rules! has_method_options {
    ($T:ty) => { $crate::__detect!(HasMethodOptionsFallback, HAS_METHOD_OPTIONS, $T) };
}

/// `T` has `metadata(&self)`.
#[macro_export]
macro_rules! has_method_metadata {
    ($T:ty) => { $crate::__detect!(HasMethodMetadataFallback, HAS_METHOD_METADATA, $T) };
}

/// `T` has `update(&mut self, arg)`.
#[macro_export]
macro_rules! has_method_update {
    ($T:ty) => { $crate::__detect!(HasMethodUpdateFallback, HAS_METHOD_UPDATE, $T) };
}

/// `T` has `index(&self, value)`.
#[macro_export]
macro_rules! has_method_index {
    ($T:ty) => { $crate::__detect!(HasMethodIndexFallback, HAS_METHOD_INDEX, $T) };
}

/// `T` has `size(&self)`.
#[macro_export]
macro_rules! has_method_size {
    ($T:ty) => { $crate::__detect!(HasMethodSizeFallback, HAS_METHOD_SIZE, $T) };
}

/// `T` has `clear(&mut self)`.
#[macro_export]
macro_rules! has_method_clear {
    ($T:ty) => { $crate::__detect!(HasMethodClearFallback, HAS_METHOD_CLEAR, $T) };
}

/// `T` has `resize(&mut self, n)`.
#[macro_export]
macro_rules! has_method_resize {
    ($T:ty) => { $crate::__detect!(HasMethodResizeFallback, HAS_METHOD_RESIZE, $T) };
}

/// `T` has `reset(&mut self, n)`.
#[macro_export]
macro_rules! has_method_reset {
    ($T:ty) => { $crate::__detect!(HasMethodResetFallback, HAS_METHOD_RESET, $T) };
}

/// `T` has `get_allocator(&self)`.
#[macro_export]
macro_rules! has_allocator {
    ($T:ty) => { $crate::__detect!(HasAllocatorFallback, HAS_ALLOCATOR, $T) };
}

/// `T == U` compiles.
#[macro_export]
macro_rules! has_operator_equal {
    ($T:ty) => { $crate::has_operator_equal!($T, $T) };
    ($T:ty, $U:ty) => { $crate::__detect!(HasOperatorEqualFallback, HAS_OPERATOR_EQUAL, $T, $U) };
}

/// `T += U` compiles.
#[macro_export]
macro_rules! has_operator_radd {
    ($T:ty) => { $crate::has_operator_radd!($T, $T) };
    ($T:ty, $U:ty) => { $crate::__detect!(HasOperatorRaddFallback, HAS_OPERATOR_RADD, $T, $U) };
}

/// `T` can be written with `{}`.
#[macro_export]
macro_rules! is_streamable {
    ($T:ty) => { $crate::__detect!(IsStreamableFallback, IS_STREAMABLE, $T) };
}

// =============================================================================
// Shapes
// =============================================================================

#[macro_export]
macro_rules! is_vector_like {
    ($T:ty) => { $crate::__detect!(IsVectorLikeFallback, IS_VECTOR_LIKE, $T) };
}

#[macro_export]
macro_rules! is_array_like {
    ($T:ty) => { $crate::__detect!(IsArrayLikeFallback, IS_ARRAY_LIKE, $T) };
}

#[macro_export]
macro_rules! is_map_like {
    ($T:ty) => { $crate::__detect!(IsMapLikeFallback, IS_MAP_LIKE, $T) };
}

#[macro_export]
macro_rules! is_iterable {
    ($T:ty) => { $crate::__detect!(IsIterableFallback, IS_ITERABLE, $T) };
}

// =============================================================================
// Contracts
// =============================================================================

/// `T` has both `index` and `size` with integral results.
#[macro_export]
macro_rules! is_axis {
    ($T:ty) => { $crate::__detect!(IsAxisFallback, IS_AXIS, $T) };
}

#[macro_export]
macro_rules! is_transform {
    ($T:ty) => { $crate::__detect!(IsTransformFallback, IS_TRANSFORM, $T) };
}

#[macro_export]
macro_rules! is_storage {
    ($T:ty) => { $crate::__detect!(IsStorageFallback, IS_STORAGE, $T) };
}

#[macro_export]
macro_rules! is_indexable {
    ($T:ty) => { $crate::__detect!(IsIndexableFallback, IS_INDEXABLE, $T) };
}

#[macro_export]
macro_rules! is_axis_variant {
    ($T:ty) => { $crate::__detect!(IsAxisVariantFallback, IS_AXIS_VARIANT, $T) };
}

#[macro_export]
macro_rules! is_sequence_of_axis {
    ($T:ty) => { $crate::__detect!(IsSequenceOfAxisFallback, IS_SEQUENCE_OF_AXIS, $T) };
}

#[macro_export]
macro_rules! is_sequence_of_axis_variant {
    ($T:ty) => {
        $crate::__detect!(IsSequenceOfAxisVariantFallback, IS_SEQUENCE_OF_AXIS_VARIANT, $T)
    };
}

/// Sequence whose elements are axes or axis variants.
#[macro_export]
macro_rules! is_sequence_of_any_axis {
    ($T:ty) => {
        $crate::is_sequence_of_axis!($T) || $crate::is_sequence_of_axis_variant!($T)
    };
}

// =============================================================================
// Payloads
// =============================================================================

#[macro_export]
macro_rules! is_weight {
    ($T:ty) => { $crate::__detect!(IsWeightFallback, IS_WEIGHT, $T) };
}

#[macro_export]
macro_rules! is_sample {
    ($T:ty) => { $crate::__detect!(IsSampleFallback, IS_SAMPLE, $T) };
}

#[cfg(test)]
mod tests {
    use core::ops::AddAssign;

    #[derive(PartialEq)]
    struct Counter(u32);

    impl AddAssign<u32> for Counter {
        fn add_assign(&mut self, rhs: u32) {
            self.0 += rhs;
        }
    }

    #[test]
    fn test_operator_probes() {
        assert!(has_operator_equal!(Counter));
        assert!(!has_operator_equal!(Counter, u32));
        assert!(has_operator_equal!(str, str));
        assert!(has_operator_radd!(Counter, u32));
        assert!(!has_operator_radd!(Counter));
        assert!(has_operator_radd!(f64));
    }

    #[test]
    fn test_probes_are_const() {
        const SIZE: bool = has_method_size!([u8; 4]);
        const CLEAR: bool = has_method_clear!([u8; 4]);
        assert!(SIZE);
        assert!(!CLEAR);
    }

    #[test]
    fn test_streamable() {
        assert!(is_streamable!(i32));
        assert!(is_streamable!(str));
        assert!(!is_streamable!(Counter));
    }
}
