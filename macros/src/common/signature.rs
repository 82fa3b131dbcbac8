//! Method signature model used by `#[structural]`.
//!
//! Only the syntactic shape is captured: receiver kind, the non-receiver
//! parameter types and the return type.

use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{FnArg, ImplItemFn, ReturnType, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receiver {
    /// Associated function, no `self`.
    None,
    /// `&self`
    Ref,
    /// `&mut self`
    Mut,
    /// `self` by value, or any typed receiver (`self: Box<Self>`, ...).
    Other,
}

pub struct MethodShape<'a> {
    pub name: String,
    pub receiver: Receiver,
    pub args: Vec<&'a Type>,
    /// `None` for `()` / no return type.
    pub output: Option<&'a Type>,
}

impl<'a> MethodShape<'a> {
    /// Returns `None` for methods that can never be mapped onto a capability
    /// (generic, async, unsafe, const, extern or variadic).
    pub fn of(method: &'a ImplItemFn) -> Option<Self> {
        let sig = &method.sig;
        if !sig.generics.params.is_empty()
            || sig.asyncness.is_some()
            || sig.unsafety.is_some()
            || sig.constness.is_some()
            || sig.abi.is_some()
            || sig.variadic.is_some()
        {
            return None;
        }

        let mut receiver = Receiver::None;
        let mut args = Vec::new();
        for input in &sig.inputs {
            match input {
                FnArg::Receiver(recv) => {
                    receiver = match (recv.reference.is_some(), recv.mutability.is_some(), recv.colon_token.is_some()) {
                        (true, false, false) => Receiver::Ref,
                        (true, true, false) => Receiver::Mut,
                        _ => Receiver::Other,
                    };
                }
                FnArg::Typed(pat) => args.push(&*pat.ty),
            }
        }

        let output = match &sig.output {
            ReturnType::Default => None,
            ReturnType::Type(_, ty) if is_unit(ty) => None,
            ReturnType::Type(_, ty) => Some(&**ty),
        };

        Some(MethodShape {
            name: sig.ident.to_string(),
            receiver,
            args,
            output,
        })
    }

    pub fn is(&self, receiver: Receiver, arity: usize) -> bool {
        self.receiver == receiver && self.args.len() == arity
    }
}

pub fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}

/// True if the type mentions a borrow or a lifetime anywhere.
///
/// Associated types cannot carry the elided lifetimes of a method
/// signature, so such types are not mapped.
pub fn borrows(ty: &Type) -> bool {
    fn scan(tokens: TokenStream) -> bool {
        tokens.into_iter().any(|tt| match tt {
            TokenTree::Punct(p) => p.as_char() == '&' || p.as_char() == '\'',
            TokenTree::Group(g) => scan(g.stream()),
            _ => false,
        })
    }
    scan(ty.to_token_stream())
}

/// True if the type is spelled as the single identifier `name`.
pub fn is_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident(name),
        _ => false,
    }
}
