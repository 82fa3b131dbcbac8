//! Qualifier descriptors and qualifier-propagating type transforms.
//!
//! A [`Qualifier`] describes how a value is held: by value, through a shared
//! borrow, or through an exclusive borrow. [`CopyQualifiers`] re-applies the
//! qualification of a source type to a target type, which is how generic
//! accessors end up returning `&T`/`&mut T`/`T` consistently with the holder
//! they were called on.
//!
//! ```text
//! CopyQualifiers<'a, &'a i32,     i64> = &'a i64
//! CopyQualifiers<'a, &'a mut i32, i64> = &'a mut i64
//! CopyQualifiers<'a, i32,         i64> = i64
//! ```
//!
//! Tuples, arrays, `Option`, the std containers and every type annotated
//! with `#[structural]` are owned sources.
//!
//! Ownership transfer covers both "const value" and "rvalue reference"
//! sources: there is no `const` value category and moving out is the
//! by-value form.

/// How a value is held.
pub trait Qualifier {
    /// `T` held with this qualification for lifetime `'a`.
    type Apply<'a, T: 'a>;
}

/// Owned, moved in and out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Value;

/// Shared borrow (`&T`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shared;

/// Exclusive borrow (`&mut T`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusive;

impl Qualifier for Value {
    type Apply<'a, T: 'a> = T;
}

impl Qualifier for Shared {
    type Apply<'a, T: 'a> = &'a T;
}

impl Qualifier for Exclusive {
    type Apply<'a, T: 'a> = &'a mut T;
}

/// Splits a type into its qualification and the underlying type.
pub trait Qualified {
    type Qualifier: Qualifier;
    type Unqualified: ?Sized;
}

impl<T: ?Sized> Qualified for &T {
    type Qualifier = Shared;
    type Unqualified = T;
}

impl<T: ?Sized> Qualified for &mut T {
    type Qualifier = Exclusive;
    type Unqualified = T;
}

macro_rules! impl_qualified_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Qualified for $ty {
                type Qualifier = Value;
                type Unqualified = $ty;
            }
        )*
    };
}

impl_qualified_by_value!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

#[cfg(feature = "alloc")]
impl Qualified for alloc::string::String {
    type Qualifier = Value;
    type Unqualified = alloc::string::String;
}

#[cfg(feature = "alloc")]
impl<T> Qualified for alloc::vec::Vec<T> {
    type Qualifier = Value;
    type Unqualified = alloc::vec::Vec<T>;
}

impl<T, const N: usize> Qualified for [T; N] {
    type Qualifier = Value;
    type Unqualified = [T; N];
}

impl<T> Qualified for Option<T> {
    type Qualifier = Value;
    type Unqualified = Option<T>;
}

impl<A> Qualified for crate::variant::Variant<A> {
    type Qualifier = Value;
    type Unqualified = crate::variant::Variant<A>;
}

/// `T` qualified the way `S` is.
pub type CopyQualifiers<'a, S, T> = CopyQualifiersOf<'a, <S as Qualified>::Qualifier, T>;

/// `T` held with qualification `Q`.
///
/// Generic code that already knows the descriptor uses this form and needs
/// no [`Qualified`] impl for the source.
pub type CopyQualifiersOf<'a, Q, T> = <Q as Qualifier>::Apply<'a, T>;

/// `S` with its reference qualification stripped.
pub type RemoveCvref<S> = <S as Qualified>::Unqualified;
