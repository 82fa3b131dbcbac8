//! Type-level booleans and branch selection.
//!
//! A probe answers with a `const bool`. [`Answer`] lifts that answer to a
//! type, [`Present`] or [`Absent`], so it can pick a type with [`If`] or a
//! code path with [`static_if`].

/// A probe answer lifted to a type.
pub trait Bool: 'static {
    const VALUE: bool;

    /// `Then` for [`Present`], `Else` for [`Absent`].
    type If<Then, Else>;

    type Not: Bool;

    type And<Other: Bool>: Bool;
}

/// The capability is there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// The capability is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Not = Absent;
    type And<Other: Bool> = Other;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Not = Present;
    type And<Other: Bool> = Absent;
}

/// Maps `true` to [`Present`] and `false` to [`Absent`].
pub trait Capable<const B: bool> {
    type Answer: Bool;
}

impl Capable<true> for () {
    type Answer = Present;
}

impl Capable<false> for () {
    type Answer = Absent;
}

/// The type-level form of the probe result `B`.
///
/// ```
/// use histo_caps::has_method_resize;
/// use histo_caps::primitives::{Answer, static_if};
///
/// let mut v = vec![1, 2];
/// let n = static_if::<Answer<{ has_method_resize!(Vec<i32>) }>, _, _, _>(
///     |v: &mut Vec<i32>| {
///         v.resize(5, 0);
///         v.len()
///     },
///     |v: &mut Vec<i32>| v.len(),
///     &mut v,
/// );
/// assert_eq!(n, 5);
/// ```
pub type Answer<const B: bool> = <() as Capable<B>>::Answer;

/// `T` when `C` holds, `E` otherwise.
pub type If<const C: bool, T, E> = <Answer<C> as Bool>::If<T, E>;

// =============================================================================
// static_if
// =============================================================================

/// Branch selection on a type-level boolean.
///
/// Only the taken branch is required to be callable with `A`; the other one
/// is carried along untouched, so it may be a closure that would not accept
/// the argument at all.
pub trait StaticIf<Then, Else, A>: Bool {
    type Output;

    fn select(then: Then, otherwise: Else, arg: A) -> Self::Output;
}

impl<Then, Else, A, R> StaticIf<Then, Else, A> for Present
where
    Then: FnOnce(A) -> R,
{
    type Output = R;

    #[inline(always)]
    fn select(then: Then, _otherwise: Else, arg: A) -> R {
        then(arg)
    }
}

impl<Then, Else, A, R> StaticIf<Then, Else, A> for Absent
where
    Else: FnOnce(A) -> R,
{
    type Output = R;

    #[inline(always)]
    fn select(_then: Then, otherwise: Else, arg: A) -> R {
        otherwise(arg)
    }
}

/// Call `then(arg)` if `B` is `Present`, `otherwise(arg)` if it is `Absent`.
///
/// ```
/// use histo_caps::primitives::{static_if, Absent, Present};
///
/// struct Callable;
/// impl Callable {
///     fn call(self) -> i32 { 1 }
/// }
/// struct NotCallable;
///
/// assert_eq!(static_if::<Present, _, _, _>(|x: Callable| x.call(), |_: Callable| 2, Callable), 1);
/// assert_eq!(static_if::<Absent, _, _, _>(|x: Callable| x.call(), |_: NotCallable| 2, NotCallable), 2);
/// ```
#[inline(always)]
pub fn static_if<B, Then, Else, A>(then: Then, otherwise: Else, arg: A) -> B::Output
where
    B: StaticIf<Then, Else, A>,
{
    B::select(then, otherwise, arg)
}
