//! # Closed Variant
//!
//! `Variant<A>` holds exactly one value out of the alternative list `A`,
//! written with [`alternatives!`](crate::alternatives):
//!
//! ```
//! use histo_caps::alternatives;
//! use histo_caps::variant::Variant;
//!
//! type Axis = Variant<alternatives![u8, char, &'static str]>;
//!
//! let mut v = Axis::new('x');
//! assert_eq!(v.discriminant(), 1);
//! assert_eq!(v.get::<char, _>(), Some(&'x'));
//!
//! v.set("label");
//! assert_eq!(v.discriminant(), 2);
//! assert_eq!(v.to_string(), "label");
//! ```
//!
//! The list is a coproduct, `Alt<A, Alt<B, .. End>>`: its enum discriminant
//! is the tag, so tag and payload always agree. `End` has no values, which
//! makes `Variant<alternatives![]>` a type without values.
//!
//! Visiting is covered in [`dispatch`].

pub mod dispatch;

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use crate::capability::Index;
use crate::error::VariantError;
use crate::primitives::{Exclusive, Shared, Value};

pub use dispatch::{
    Dispatch, Distribute, Identity, IndexVisitor, SizeVisitor, Unify, Visitable, Visitor,
    VisitorReturnType, visit,
};

// =============================================================================
// Alternative list
// =============================================================================

/// Non-empty alternative list: either the head alternative or one of the tail.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alt<H, T> {
    Head(H),
    Tail(T),
}

/// Empty alternative list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {}

/// Build an alternative list type: `alternatives![A, B]` is
/// `Alt<A, Alt<B, End>>`.
#[macro_export]
macro_rules! alternatives {
    () => { $crate::variant::End };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::variant::Alt<$head, $crate::alternatives![$($tail),*]>
    };
}

/// Length and live position of an alternative list.
pub trait Alternatives {
    const COUNT: usize;

    /// Zero-based position of the live alternative.
    fn discriminant(&self) -> usize;

    /// Type name of the live alternative.
    fn live_type_name(&self) -> &'static str;
}

impl Alternatives for End {
    const COUNT: usize = 0;

    fn discriminant(&self) -> usize {
        match *self {}
    }

    fn live_type_name(&self) -> &'static str {
        match *self {}
    }
}

impl<H, T: Alternatives> Alternatives for Alt<H, T> {
    const COUNT: usize = 1 + T::COUNT;

    #[inline]
    fn discriminant(&self) -> usize {
        match self {
            Alt::Head(_) => 0,
            Alt::Tail(tail) => 1 + tail.discriminant(),
        }
    }

    #[inline]
    fn live_type_name(&self) -> &'static str {
        match self {
            Alt::Head(_) => type_name::<H>(),
            Alt::Tail(tail) => tail.live_type_name(),
        }
    }
}

// =============================================================================
// Injection
// =============================================================================

/// Position marker: the head of the list.
pub struct Here;

/// Position marker: somewhere in the tail, at `I`.
pub struct There<I>(PhantomData<I>);

/// `T` is an alternative of `Self`, found at position `I`.
///
/// `I` is inferred; it only becomes ambiguous if `T` is listed twice.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not one of the alternatives `{Self}`",
    label = "not an alternative of this variant"
)]
pub trait Inject<T, I> {
    fn inject(value: T) -> Self;
    fn get(&self) -> Option<&T>;
    fn get_mut(&mut self) -> Option<&mut T>;
    fn take(self) -> Result<T, Self>
    where
        Self: Sized;
}

impl<H, T> Inject<H, Here> for Alt<H, T> {
    #[inline]
    fn inject(value: H) -> Self {
        Alt::Head(value)
    }

    #[inline]
    fn get(&self) -> Option<&H> {
        match self {
            Alt::Head(head) => Some(head),
            Alt::Tail(_) => None,
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut H> {
        match self {
            Alt::Head(head) => Some(head),
            Alt::Tail(_) => None,
        }
    }

    #[inline]
    fn take(self) -> Result<H, Self> {
        match self {
            Alt::Head(head) => Ok(head),
            tail => Err(tail),
        }
    }
}

impl<H, T, U, I> Inject<U, There<I>> for Alt<H, T>
where
    T: Inject<U, I>,
{
    #[inline]
    fn inject(value: U) -> Self {
        Alt::Tail(T::inject(value))
    }

    #[inline]
    fn get(&self) -> Option<&U> {
        match self {
            Alt::Head(_) => None,
            Alt::Tail(tail) => tail.get(),
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut U> {
        match self {
            Alt::Head(_) => None,
            Alt::Tail(tail) => tail.get_mut(),
        }
    }

    #[inline]
    fn take(self) -> Result<U, Self> {
        match self {
            Alt::Tail(tail) => tail.take().map_err(Alt::Tail),
            head => Err(head),
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// Tagged union over the alternative list `A`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant<A> {
    pub(crate) inner: A,
}

impl<A> Variant<A> {
    /// Wrap `value` as the live alternative.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        A: Inject<T, I>,
    {
        Variant { inner: A::inject(value) }
    }

    /// Replace the live alternative. The previous one is dropped first.
    #[inline]
    pub fn set<T, I>(&mut self, value: T)
    where
        A: Inject<T, I>,
    {
        self.inner = A::inject(value);
    }

    /// The live alternative if it is a `T`.
    #[inline]
    pub fn get<T, I>(&self) -> Option<&T>
    where
        A: Inject<T, I>,
    {
        self.inner.get()
    }

    #[inline]
    pub fn get_mut<T, I>(&mut self) -> Option<&mut T>
    where
        A: Inject<T, I>,
    {
        self.inner.get_mut()
    }

    /// Whether the live alternative is a `T`.
    #[inline]
    pub fn holds<T, I>(&self) -> bool
    where
        A: Inject<T, I>,
    {
        self.inner.get().is_some()
    }

    /// Like [`get`](Self::get), naming both types on failure.
    pub fn try_get<T, I>(&self) -> Result<&T, VariantError>
    where
        A: Inject<T, I> + Alternatives,
    {
        self.inner.get().ok_or_else(|| VariantError::WrongAlternative {
            held: self.inner.live_type_name(),
            requested: type_name::<T>(),
        })
    }

    /// Move the live alternative out if it is a `T`; hand the variant back otherwise.
    #[inline]
    pub fn take<T, I>(self) -> Result<T, Self>
    where
        A: Inject<T, I>,
    {
        self.inner.take().map_err(|inner| Variant { inner })
    }

    /// The underlying alternative list.
    #[inline]
    pub fn into_inner(self) -> A {
        self.inner
    }

    #[inline]
    pub fn as_inner(&self) -> &A {
        &self.inner
    }

    /// Zero-based position of the live alternative in `A`.
    #[inline]
    pub fn discriminant(&self) -> usize
    where
        A: Alternatives,
    {
        self.inner.discriminant()
    }

    /// Visit the live alternative by value.
    #[inline]
    pub fn visit<'a, V>(self, visitor: V) -> <A as Dispatch<'a, Value, V>>::Output
    where
        A: Dispatch<'a, Value, V>,
    {
        A::dispatch(self.inner, visitor)
    }

    /// Visit the live alternative through a shared borrow.
    #[inline]
    pub fn visit_ref<'a, V>(&'a self, visitor: V) -> <A as Dispatch<'a, Shared, V>>::Output
    where
        A: Dispatch<'a, Shared, V>,
    {
        A::dispatch(&self.inner, visitor)
    }

    /// Visit the live alternative through an exclusive borrow.
    #[inline]
    pub fn visit_mut<'a, V>(&'a mut self, visitor: V) -> <A as Dispatch<'a, Exclusive, V>>::Output
    where
        A: Dispatch<'a, Exclusive, V>,
    {
        A::dispatch(&mut self.inner, visitor)
    }

    /// Bin count of the live axis.
    #[inline]
    pub fn size<'a>(&'a self) -> Index
    where
        A: Dispatch<'a, Shared, SizeVisitor, Output = Index>,
    {
        self.visit_ref(SizeVisitor)
    }

    /// Bin index of `x` on the live axis.
    #[inline]
    pub fn index<'a, U>(&'a self, x: U) -> Index
    where
        A: Dispatch<'a, Shared, IndexVisitor<U>, Output = Index>,
    {
        self.visit_ref(IndexVisitor(x))
    }
}

impl<A: Alternatives> Variant<A> {
    /// Number of alternatives.
    pub const COUNT: usize = A::COUNT;
}

// =============================================================================
// Formatting
// =============================================================================

impl<H: fmt::Display, T: fmt::Display> fmt::Display for Alt<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alt::Head(head) => head.fmt(f),
            Alt::Tail(tail) => tail.fmt(f),
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl<H: fmt::Debug, T: fmt::Debug> fmt::Debug for Alt<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alt::Head(head) => head.fmt(f),
            Alt::Tail(tail) => tail.fmt(f),
        }
    }
}

impl fmt::Debug for End {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl<A: fmt::Display> fmt::Display for Variant<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<A: fmt::Debug> fmt::Debug for Variant<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variant").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Three = alternatives![i32, char, bool];

    #[test]
    fn test_count_and_discriminant() {
        assert_eq!(<Three as Alternatives>::COUNT, 3);
        assert_eq!(Variant::<Three>::COUNT, 3);
        assert_eq!(<End as Alternatives>::COUNT, 0);

        assert_eq!(Variant::<Three>::new(1_i32).discriminant(), 0);
        assert_eq!(Variant::<Three>::new('a').discriminant(), 1);
        assert_eq!(Variant::<Three>::new(true).discriminant(), 2);
    }

    #[test]
    fn test_set_switches_alternative() {
        let mut v = Variant::<Three>::new(1_i32);
        assert!(v.holds::<i32, _>());
        v.set(false);
        assert!(!v.holds::<i32, _>());
        assert_eq!(v.get::<bool, _>(), Some(&false));
        assert_eq!(v.get::<char, _>(), None);
    }

    #[test]
    fn test_take() {
        let v = Variant::<Three>::new('q');
        let v = v.take::<i32, _>().unwrap_err();
        assert_eq!(v.take::<char, _>(), Ok('q'));
    }

    #[test]
    fn test_try_get_names_types() {
        let v = Variant::<Three>::new(true);
        let err = v.try_get::<i32, _>().unwrap_err();
        assert_eq!(
            err,
            VariantError::WrongAlternative { held: "bool", requested: "i32" }
        );
    }

    #[test]
    fn test_debug_forwards_live_alternative() {
        let v = Variant::<Three>::new('z');
        assert_eq!(format!("{:?}", v), "Variant('z')");
    }
}
