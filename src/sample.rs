//! Weight and sample payloads.
//!
//! `weight(x)` and `sample((a, b))` wrap a value to mark its role when it is
//! passed next to coordinates. Only the wrappers count: a plain `f64` is
//! not a weight and a plain tuple is not a sample.
//!
//! ```
//! use histo_caps::{is_sample, is_weight, sample};
//! use histo_caps::sample::{weight, SampleType, WeightType};
//!
//! let w = weight(0.5);
//! assert_eq!(w.value, 0.5);
//! assert_eq!(sample!(1, 2.0).value, (1, 2.0));
//!
//! assert!(is_weight!(WeightType<f64>));
//! assert!(!is_weight!(f64));
//! assert!(is_sample!(SampleType<(i32, f64)>));
//! assert!(!is_sample!((i32, f64)));
//! ```

use crate::primitives::Tuple;

/// A weighting factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeightType<T> {
    pub value: T,
}

/// A sample tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleType<T> {
    pub value: T,
}

/// Mark `value` as a weight.
#[inline]
pub fn weight<T>(value: T) -> WeightType<T> {
    WeightType { value }
}

/// Mark `values` as a sample.
#[inline]
pub fn sample<T: Tuple>(values: T) -> SampleType<T> {
    SampleType { value: values }
}

/// `sample!(a, b, ..)` is `sample((a, b, ..))`.
#[macro_export]
macro_rules! sample {
    ($($x:expr),* $(,)?) => {
        $crate::sample::sample(($($x,)*))
    };
}

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for super::WeightType<T> {}
    impl<T> Sealed for super::SampleType<T> {}
}

/// Implemented by [`WeightType`] only.
pub trait Weight: sealed::Sealed {
    type Value;

    fn into_value(self) -> Self::Value;
}

impl<T> Weight for WeightType<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> T {
        self.value
    }
}

/// Implemented by [`SampleType`] only.
pub trait Sample: sealed::Sealed {
    type Values: Tuple;

    fn into_values(self) -> Self::Values;
}

impl<T: Tuple> Sample for SampleType<T> {
    type Values = T;

    #[inline]
    fn into_values(self) -> T {
        self.value
    }
}
