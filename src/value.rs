//! # Resource-preserving default construction
//!
//! `make_default!(x)` builds a fresh, empty value of the same type as `x`.
//! When the type allocates from an attached allocator ([`NewIn`]), the new
//! value is built in `x`'s allocator; otherwise it falls back to
//! [`Default`].
//!
//! ```
//! use histo_caps::make_default;
//!
//! let v = vec![1, 2, 3];
//! let fresh: Vec<i32> = make_default!(v);
//! assert!(fresh.is_empty());
//! ```
//!
//! The choice between the two is made by method priority: an inherent
//! method on [`Defaulted`] guarded by `T: NewIn` is found before the
//! [`DefaultFallback`] trait method. Like the probes, this picks the
//! allocator path only where `T: NewIn` is visible. Generic code uses
//! [`make_default_in`] with a `NewIn` bound.

use crate::capability::NewIn;

/// Borrowed source of a default construction.
#[doc(hidden)]
pub struct Defaulted<'a, T>(pub &'a T);

impl<T: NewIn> Defaulted<'_, T> {
    #[inline]
    pub fn make_default(&self) -> T {
        make_default_in(self.0)
    }
}

/// Fallback for types without an attached allocator.
#[doc(hidden)]
pub trait DefaultFallback<T> {
    fn make_default(&self) -> T;
}

impl<T: Default> DefaultFallback<T> for Defaulted<'_, T> {
    #[inline]
    fn make_default(&self) -> T {
        T::default()
    }
}

/// Empty value of the same type as `source`, allocating from its allocator.
#[inline]
pub fn make_default_in<T: NewIn>(source: &T) -> T {
    T::new_in(source.get_allocator())
}

/// Empty value of the same type as the argument, keeping its allocator if
/// it has one.
#[macro_export]
macro_rules! make_default {
    ($x:expr) => {{
        #[allow(unused_imports)]
        use $crate::value::DefaultFallback as _;
        $crate::value::Defaulted(&$x).make_default()
    }};
}
