//! `#[structural]`: derive capability impls from an inherent impl block.
//!
//! Each method whose name and shape match a known operation produces one
//! impl of the corresponding `histo_caps::capability` trait, delegating to
//! the inherent method. Methods that do not match are left alone, so the
//! matching probe stays `false` instead of breaking the build.
//!
//! | name            | receiver    | params | return           |
//! |-----------------|-------------|--------|------------------|
//! | `value`         | `&self`     | 1      | owned            |
//! | `options`       | `&self`     | 0      | owned            |
//! | `metadata`      | `&self`     | 0      | `&T`             |
//! | `update`        | `&mut self` | 1      | owned            |
//! | `index`         | `&self`     | 1      | owned            |
//! | `size`          | `&self`     | 0      | owned            |
//! | `clear`         | `&mut self` | 0      | `()`             |
//! | `resize`        | `&mut self` | `usize`| `()`             |
//! | `reset`         | `&mut self` | `usize`| `()`             |
//! | `forward`       | `&self`     | 1      | owned            |
//! | `inverse`       | `&self`     | 1      | owned            |
//! | `get_allocator` | `&self`     | 0      | owned            |
//! | `new_in`        | none        | 1      | `Self`           |
//!
//! The annotated type also becomes an owned `Qualified` source, so a type
//! takes `#[structural]` on one impl block only.
//!
//! `options` and `metadata` taking `&mut self` are skipped; implement the
//! trait by hand for those.
//!
//! `new_in` is only mapped when the same block has a `get_allocator` whose
//! return type is spelled exactly like `new_in`'s parameter.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{ImplItem, ItemImpl, Type};

use crate::common::{MethodShape, Receiver, borrows, is_named};

pub fn expand_structural(item: ItemImpl) -> TokenStream {
    if let Some((_, path, _)) = &item.trait_ {
        return syn::Error::new_spanned(
            path,
            "#[structural] expects an inherent impl block, not a trait impl",
        )
        .to_compile_error();
    }

    let shapes: Vec<MethodShape> = item
        .items
        .iter()
        .filter_map(|member| match member {
            ImplItem::Fn(method) => MethodShape::of(method),
            _ => None,
        })
        .collect();

    let generated: Vec<TokenStream> = shapes
        .iter()
        .filter_map(|shape| capability_impl(&item, shape, &shapes))
        .collect();

    let self_ty = &*item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    quote! {
        #item

        #[automatically_derived]
        impl #impl_generics ::histo_caps::primitives::Qualified for #self_ty #where_clause {
            type Qualifier = ::histo_caps::primitives::Value;
            type Unqualified = Self;
        }

        #(#generated)*
    }
}

/// Owned return type tokens; `()` when the method returns nothing.
fn owned(ty: Option<&Type>) -> Option<TokenStream> {
    match ty {
        None => Some(quote! { () }),
        Some(ty) if borrows(ty) => None,
        Some(ty) => Some(ty.to_token_stream()),
    }
}

/// True if `shapes` holds a `get_allocator(&self)` that returns `allocator`
/// by value, so the `MethodAllocator` supertrait of `NewIn` is generated too.
fn has_allocator_returning(shapes: &[MethodShape], allocator: &Type) -> bool {
    let wanted = allocator.to_token_stream().to_string();
    shapes.iter().any(|shape| {
        shape.name == "get_allocator"
            && shape.is(Receiver::Ref, 0)
            && shape
                .output
                .is_some_and(|out| !borrows(out) && out.to_token_stream().to_string() == wanted)
    })
}

fn returns_self(shape: &MethodShape, self_ty: &Type) -> bool {
    match shape.output {
        Some(ty) => {
            is_named(ty, "Self")
                || ty.to_token_stream().to_string() == self_ty.to_token_stream().to_string()
        }
        None => false,
    }
}

/// One trait impl for one recognised method, or `None`.
fn capability_impl(
    item: &ItemImpl,
    shape: &MethodShape,
    siblings: &[MethodShape],
) -> Option<TokenStream> {
    let self_ty = &*item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let cap = quote! { ::histo_caps::capability };

    let body = match shape.name.as_str() {
        "value" if shape.is(Receiver::Ref, 1) && !borrows(shape.args[0]) => {
            let arg = shape.args[0];
            let out = owned(shape.output)?;
            quote! {
                #cap::MethodValue for #self_ty #where_clause {
                    type Arg = #arg;
                    type Output = #out;
                    #[inline]
                    fn value(&self, arg: #arg) -> #out { <#self_ty>::value(self, arg) }
                }
            }
        }
        "options" if shape.is(Receiver::Ref, 0) => {
            let out = owned(shape.output)?;
            quote! {
                #cap::MethodOptions for #self_ty #where_clause {
                    type Options = #out;
                    #[inline]
                    fn options(&self) -> #out { <#self_ty>::options(self) }
                }
            }
        }
        "metadata" if shape.is(Receiver::Ref, 0) => {
            let meta = match shape.output? {
                Type::Reference(r) if r.mutability.is_none() && !borrows(&r.elem) => &r.elem,
                _ => return None,
            };
            quote! {
                #cap::MethodMetadata for #self_ty #where_clause {
                    type Metadata = #meta;
                    #[inline]
                    fn metadata(&self) -> &#meta { <#self_ty>::metadata(self) }
                }
            }
        }
        "update" if shape.is(Receiver::Mut, 1) && !borrows(shape.args[0]) => {
            let arg = shape.args[0];
            let out = owned(shape.output)?;
            quote! {
                #cap::MethodUpdate for #self_ty #where_clause {
                    type Arg = #arg;
                    type Output = #out;
                    #[inline]
                    fn update(&mut self, arg: #arg) -> #out { <#self_ty>::update(self, arg) }
                }
            }
        }
        "index" if shape.is(Receiver::Ref, 1) && !borrows(shape.args[0]) => {
            let arg = shape.args[0];
            let out = owned(Some(shape.output?))?;
            quote! {
                #cap::MethodIndex for #self_ty #where_clause {
                    type Value = #arg;
                    type Output = #out;
                    #[inline]
                    fn index(&self, value: #arg) -> #out { <#self_ty>::index(self, value) }
                }
            }
        }
        "size" if shape.is(Receiver::Ref, 0) => {
            let out = owned(Some(shape.output?))?;
            quote! {
                #cap::MethodSize for #self_ty #where_clause {
                    type Output = #out;
                    #[inline]
                    fn size(&self) -> #out { <#self_ty>::size(self) }
                }
            }
        }
        "clear" if shape.is(Receiver::Mut, 0) && shape.output.is_none() => quote! {
            #cap::MethodClear for #self_ty #where_clause {
                #[inline]
                fn clear(&mut self) { <#self_ty>::clear(self) }
            }
        },
        "resize"
            if shape.is(Receiver::Mut, 1)
                && is_named(shape.args[0], "usize")
                && shape.output.is_none() =>
        {
            quote! {
                #cap::MethodResize for #self_ty #where_clause {
                    #[inline]
                    fn resize(&mut self, n: usize) { <#self_ty>::resize(self, n) }
                }
            }
        }
        "reset"
            if shape.is(Receiver::Mut, 1)
                && is_named(shape.args[0], "usize")
                && shape.output.is_none() =>
        {
            quote! {
                #cap::MethodReset for #self_ty #where_clause {
                    #[inline]
                    fn reset(&mut self, n: usize) { <#self_ty>::reset(self, n) }
                }
            }
        }
        name @ ("forward" | "inverse")
            if shape.is(Receiver::Ref, 1) && !borrows(shape.args[0]) =>
        {
            let arg = shape.args[0];
            let out = owned(Some(shape.output?))?;
            let (tr, method) = if name == "forward" {
                (quote! { MethodForward }, quote! { forward })
            } else {
                (quote! { MethodInverse }, quote! { inverse })
            };
            quote! {
                #cap::#tr for #self_ty #where_clause {
                    type Arg = #arg;
                    type Output = #out;
                    #[inline]
                    fn #method(&self, x: #arg) -> #out { <#self_ty>::#method(self, x) }
                }
            }
        }
        "get_allocator" if shape.is(Receiver::Ref, 0) => {
            let out = owned(Some(shape.output?))?;
            quote! {
                #cap::MethodAllocator for #self_ty #where_clause {
                    type Allocator = #out;
                    #[inline]
                    fn get_allocator(&self) -> #out { <#self_ty>::get_allocator(self) }
                }
            }
        }
        "new_in"
            if shape.is(Receiver::None, 1)
                && returns_self(shape, self_ty)
                && has_allocator_returning(siblings, shape.args[0]) =>
        {
            let arg = shape.args[0];
            quote! {
                #cap::NewIn for #self_ty #where_clause {
                    #[inline]
                    fn new_in(allocator: #arg) -> Self { <#self_ty>::new_in(allocator) }
                }
            }
        }
        _ => return None,
    };

    Some(quote! {
        #[automatically_derived]
        impl #impl_generics #body
    })
}
