//! Parameter introspection for callable signatures.
//!
//! Function items are coerced to pointers to be inspected:
//!
//! ```
//! use histo_caps::primitives::{ArgOf, ArgsOf, MethodArgOf};
//!
//! struct Foo;
//! impl Foo {
//!     fn f1(_: char) -> i32 { 0 }
//!     fn f2(&self, _: i64) -> i32 { 0 }
//! }
//!
//! let _f1 = Foo::f1 as fn(char) -> i32;
//! let _f2 = Foo::f2 as fn(&Foo, i64) -> i32;
//!
//! let _: ArgsOf<fn(char) -> i32> = ('x',);
//! let _: ArgOf<fn(char) -> i32> = 'x';
//! let _: MethodArgOf<fn(&Foo, i64) -> i32> = 7_i64;
//! ```
//!
//! Asking for the single parameter of anything that does not take exactly
//! one fails to build:
//!
//! ```compile_fail
//! use histo_caps::primitives::ArgOf;
//!
//! let _: ArgOf<fn(i32, i32) -> i32> = 0;
//! ```

/// Free callable: parameters as a tuple, result, arity.
pub trait Signature {
    type Args;
    type Output;
    const ARITY: usize;
}

/// Method-like callable whose first parameter is the receiver.
pub trait MethodSignature {
    type Receiver: ?Sized;
    /// Parameters without the receiver.
    type Args;
    type Output;
    const ARITY: usize;
}

/// Parameter list that holds exactly one parameter.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a single-parameter list",
    label = "expected exactly one parameter",
    note = "the single-parameter accessors only apply to callables of arity one"
)]
pub trait Single {
    type Only;
}

impl<A> Single for (A,) {
    type Only = A;
}

/// Parameter tuple of `F`.
pub type ArgsOf<F> = <F as Signature>::Args;

/// The one parameter of `F`.
pub type ArgOf<F> = <<F as Signature>::Args as Single>::Only;

/// Parameter tuple of method `F`, receiver excluded.
pub type MethodArgsOf<F> = <F as MethodSignature>::Args;

/// The one non-receiver parameter of method `F`.
pub type MethodArgOf<F> = <<F as MethodSignature>::Args as Single>::Only;

macro_rules! impl_signature {
    ($n:expr; $($A:ident),*) => {
        impl<R $(, $A)*> Signature for fn($($A),*) -> R {
            type Args = ($($A,)*);
            type Output = R;
            const ARITY: usize = $n;
        }

        impl<S: ?Sized, R $(, $A)*> MethodSignature for fn(&S $(, $A)*) -> R {
            type Receiver = S;
            type Args = ($($A,)*);
            type Output = R;
            const ARITY: usize = $n;
        }

        impl<S: ?Sized, R $(, $A)*> MethodSignature for fn(&mut S $(, $A)*) -> R {
            type Receiver = S;
            type Args = ($($A,)*);
            type Output = R;
            const ARITY: usize = $n;
        }
    };
}

impl_signature!(0;);
impl_signature!(1; A0);
impl_signature!(2; A0, A1);
impl_signature!(3; A0, A1, A2);
impl_signature!(4; A0, A1, A2, A3);
impl_signature!(5; A0, A1, A2, A3, A4);
impl_signature!(6; A0, A1, A2, A3, A4, A5);
impl_signature!(7; A0, A1, A2, A3, A4, A5, A6);
impl_signature!(8; A0, A1, A2, A3, A4, A5, A6, A7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(<fn() -> u8 as Signature>::ARITY, 0);
        assert_eq!(<fn(u8, u16, u32) -> u8 as Signature>::ARITY, 3);
        assert_eq!(<fn(&str, u8) -> bool as MethodSignature>::ARITY, 1);
    }

    #[test]
    fn test_method_strips_receiver() {
        let args: MethodArgsOf<fn(&mut Vec<u8>, usize, u8)> = (3, 9);
        assert_eq!(args, (3, 9));
        let only: ArgOf<fn(f64) -> f64> = 1.5;
        assert_eq!(only, 1.5);
    }
}
