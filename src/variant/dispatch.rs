//! Visitor dispatch over a closed alternative list.
//!
//! Dispatch walks the `Alt` list recursively, the way `All`/`Any` queries
//! walk an HList. The qualifier `Q` the variant is visited through
//! (`Value`, `Shared`, `Exclusive`) is pushed down to the live alternative,
//! so a visitor sees `T`, `&T` or `&mut T`.
//!
//! Each level combines the head's result type with the tail's through
//! [`Unify`]:
//!
//! | head \ tail | `T` | `&T` | `&mut T` |
//! |-------------|-----|------|----------|
//! | `T`         | `T` | `T`  | `T`      |
//! | `&T`        | `T` | `&T` | `&T`     |
//! | `&mut T`    | `T` | `&T` | `&mut T` |
//!
//! Falling back to `T` clones the borrowed result. Any other pair has no
//! common type and the visit does not build:
//!
//! ```compile_fail
//! use histo_caps::alternatives;
//! use histo_caps::variant::{Variant, Visitor};
//!
//! struct Widen;
//! impl Visitor<u8> for Widen {
//!     type Output = i32;
//!     fn visit(self, v: u8) -> i32 { v as i32 }
//! }
//! impl Visitor<char> for Widen {
//!     type Output = char;
//!     fn visit(self, v: char) -> char { v }
//! }
//!
//! let v = Variant::<alternatives![u8, char]>::new('x');
//! let _ = v.visit(Widen);
//! ```

use crate::capability::{Index, Integral, MethodIndex, MethodSize};
use crate::primitives::{Exclusive, Qualifier, Shared, Value};

use super::{Alt, End, Variant};

// =============================================================================
// Visitor
// =============================================================================

/// Acts on one alternative of type `T`.
pub trait Visitor<T> {
    type Output;

    fn visit(self, value: T) -> Self::Output;
}

/// Returns the alternative as it was handed over.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> Visitor<T> for Identity {
    type Output = T;

    #[inline]
    fn visit(self, value: T) -> T {
        value
    }
}

// =============================================================================
// Unification
// =============================================================================

/// Common result type of two visitor results.
#[diagnostic::on_unimplemented(
    message = "visitor results `{Self}` and `{Other}` have no common type",
    label = "ambiguous variant return type",
    note = "every alternative must produce the same type, or the same type with a different reference qualification"
)]
pub trait Unify<Other> {
    type Out;

    fn left(self) -> Self::Out;
    fn right(other: Other) -> Self::Out;
}

impl<T> Unify<T> for T {
    type Out = T;

    #[inline]
    fn left(self) -> T {
        self
    }

    #[inline]
    fn right(other: T) -> T {
        other
    }
}

impl<'a, T: ?Sized> Unify<&'a mut T> for &'a T {
    type Out = &'a T;

    #[inline]
    fn left(self) -> &'a T {
        self
    }

    #[inline]
    fn right(other: &'a mut T) -> &'a T {
        other
    }
}

impl<'a, T: ?Sized> Unify<&'a T> for &'a mut T {
    type Out = &'a T;

    #[inline]
    fn left(self) -> &'a T {
        self
    }

    #[inline]
    fn right(other: &'a T) -> &'a T {
        other
    }
}

impl<'a, T: Clone> Unify<&'a T> for T {
    type Out = T;

    #[inline]
    fn left(self) -> T {
        self
    }

    #[inline]
    fn right(other: &'a T) -> T {
        other.clone()
    }
}

impl<'a, T: Clone> Unify<T> for &'a T {
    type Out = T;

    #[inline]
    fn left(self) -> T {
        self.clone()
    }

    #[inline]
    fn right(other: T) -> T {
        other
    }
}

impl<'a, T: Clone> Unify<&'a mut T> for T {
    type Out = T;

    #[inline]
    fn left(self) -> T {
        self
    }

    #[inline]
    fn right(other: &'a mut T) -> T {
        other.clone()
    }
}

impl<'a, T: Clone> Unify<T> for &'a mut T {
    type Out = T;

    #[inline]
    fn left(self) -> T {
        self.clone()
    }

    #[inline]
    fn right(other: T) -> T {
        other
    }
}

// =============================================================================
// Qualifier distribution
// =============================================================================

/// Moves a qualifier from a list node onto its head and tail.
pub trait Distribute: Qualifier {
    fn distribute<'a, H: 'a, T: 'a>(
        this: Self::Apply<'a, Alt<H, T>>,
    ) -> Alt<Self::Apply<'a, H>, Self::Apply<'a, T>>;

    /// The end of the list has no values.
    fn vacant<'a, R>(this: Self::Apply<'a, End>) -> R;
}

impl Distribute for Value {
    #[inline]
    fn distribute<'a, H: 'a, T: 'a>(this: Alt<H, T>) -> Alt<H, T> {
        this
    }

    #[inline]
    fn vacant<'a, R>(this: Self::Apply<'a, End>) -> R {
        match this {}
    }
}

impl Distribute for Shared {
    #[inline]
    fn distribute<'a, H: 'a, T: 'a>(this: &'a Alt<H, T>) -> Alt<&'a H, &'a T> {
        match this {
            Alt::Head(head) => Alt::Head(head),
            Alt::Tail(tail) => Alt::Tail(tail),
        }
    }

    #[inline]
    fn vacant<'a, R>(this: Self::Apply<'a, End>) -> R {
        match *this {}
    }
}

impl Distribute for Exclusive {
    #[inline]
    fn distribute<'a, H: 'a, T: 'a>(this: &'a mut Alt<H, T>) -> Alt<&'a mut H, &'a mut T> {
        match this {
            Alt::Head(head) => Alt::Head(head),
            Alt::Tail(tail) => Alt::Tail(tail),
        }
    }

    #[inline]
    fn vacant<'a, R>(this: Self::Apply<'a, End>) -> R {
        match *this {}
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs visitor `V` on the live alternative of `Self` seen through `Q`.
#[diagnostic::on_unimplemented(
    message = "cannot visit alternatives `{Self}` with `{V}`",
    label = "the visitor must accept every alternative",
    note = "the empty alternative list has no values and cannot be visited"
)]
pub trait Dispatch<'a, Q: Distribute, V>: Sized + 'a {
    type Output;

    fn dispatch(this: Q::Apply<'a, Self>, visitor: V) -> Self::Output;
}

impl<'a, Q, V, H> Dispatch<'a, Q, V> for Alt<H, End>
where
    Q: Distribute,
    H: 'a,
    V: Visitor<Q::Apply<'a, H>>,
{
    type Output = <V as Visitor<Q::Apply<'a, H>>>::Output;

    #[inline]
    fn dispatch(this: Q::Apply<'a, Self>, visitor: V) -> Self::Output {
        match Q::distribute::<H, End>(this) {
            Alt::Head(head) => <V as Visitor<Q::Apply<'a, H>>>::visit(visitor, head),
            Alt::Tail(end) => Q::vacant(end),
        }
    }
}

impl<'a, Q, V, H, H2, T> Dispatch<'a, Q, V> for Alt<H, Alt<H2, T>>
where
    Q: Distribute,
    H: 'a,
    H2: 'a,
    T: 'a,
    V: Visitor<Q::Apply<'a, H>>,
    Alt<H2, T>: Dispatch<'a, Q, V>,
    <V as Visitor<Q::Apply<'a, H>>>::Output: Unify<<Alt<H2, T> as Dispatch<'a, Q, V>>::Output>,
{
    type Output = <<V as Visitor<Q::Apply<'a, H>>>::Output as Unify<
        <Alt<H2, T> as Dispatch<'a, Q, V>>::Output,
    >>::Out;

    #[inline]
    fn dispatch(this: Q::Apply<'a, Self>, visitor: V) -> Self::Output {
        match Q::distribute::<H, Alt<H2, T>>(this) {
            Alt::Head(head) => <<V as Visitor<Q::Apply<'a, H>>>::Output as Unify<
                <Alt<H2, T> as Dispatch<'a, Q, V>>::Output,
            >>::left(<V as Visitor<Q::Apply<'a, H>>>::visit(visitor, head)),
            Alt::Tail(rest) => <<V as Visitor<Q::Apply<'a, H>>>::Output as Unify<
                <Alt<H2, T> as Dispatch<'a, Q, V>>::Output,
            >>::right(<Alt<H2, T> as Dispatch<'a, Q, V>>::dispatch(rest, visitor)),
        }
    }
}

// =============================================================================
// Visitable
// =============================================================================

/// A variant, possibly behind a reference, that a visitor can be applied to.
pub trait Visitable<'a, V> {
    type Output;

    fn accept(self, visitor: V) -> Self::Output;
}

impl<'a, A, V> Visitable<'a, V> for Variant<A>
where
    A: Dispatch<'a, Value, V>,
{
    type Output = A::Output;

    #[inline]
    fn accept(self, visitor: V) -> Self::Output {
        A::dispatch(self.inner, visitor)
    }
}

impl<'a, A, V> Visitable<'a, V> for &'a Variant<A>
where
    A: Dispatch<'a, Shared, V>,
{
    type Output = A::Output;

    #[inline]
    fn accept(self, visitor: V) -> Self::Output {
        A::dispatch(&self.inner, visitor)
    }
}

impl<'a, A, V> Visitable<'a, V> for &'a mut Variant<A>
where
    A: Dispatch<'a, Exclusive, V>,
{
    type Output = A::Output;

    #[inline]
    fn accept(self, visitor: V) -> Self::Output {
        A::dispatch(&mut self.inner, visitor)
    }
}

/// Result type of visiting `X` with `V`.
pub type VisitorReturnType<'a, V, X> = <X as Visitable<'a, V>>::Output;

/// Apply `visitor` to the live alternative of `x`.
///
/// `x` may be a `Variant`, `&Variant` or `&mut Variant`; the visitor receives
/// the alternative with the same qualification.
#[inline]
pub fn visit<'a, V, X>(visitor: V, x: X) -> VisitorReturnType<'a, V, X>
where
    X: Visitable<'a, V>,
{
    x.accept(visitor)
}

// =============================================================================
// Axis visitors
// =============================================================================

/// Bin count of an axis alternative.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeVisitor;

impl<'a, T> Visitor<&'a T> for SizeVisitor
where
    T: MethodSize<Output: Integral>,
{
    type Output = Index;

    #[inline]
    fn visit(self, axis: &'a T) -> Index {
        axis.size().to_index()
    }
}

/// Bin index of a coordinate on an axis alternative.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexVisitor<U>(pub U);

impl<'a, T, U> Visitor<&'a T> for IndexVisitor<U>
where
    T: MethodIndex<Output: Integral, Value: From<U>>,
{
    type Output = Index;

    #[inline]
    fn visit(self, axis: &'a T) -> Index {
        axis.index(T::Value::from(self.0)).to_index()
    }
}
