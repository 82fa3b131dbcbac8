//! Per-arity tuple impl generation.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, LitInt, parse::Parse, parse::ParseStream};

pub struct TuplesInput {
    pub max: usize,
}

impl Parse for TuplesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(TuplesInput { max })
    }
}

fn type_params(n: usize) -> Vec<Ident> {
    (0..n).map(|i| Ident::new(&format!("T{}", i), Span::call_site())).collect()
}

fn value_bindings(n: usize) -> Vec<Ident> {
    (0..n).map(|i| Ident::new(&format!("v{}", i), Span::call_site())).collect()
}

/// Generate `Tuple`, `FixedLength`, `Qualified`, `GetSize`, `Last` and every
/// in-range `TupleSlice<BEGIN, COUNT>` for tuples of arity `0..=max`.
///
/// Trait names are emitted unqualified; the call site must have them in scope.
pub fn expand_tuples(input: TuplesInput) -> TokenStream {
    let mut impls = Vec::new();

    for n in 0..=input.max {
        let params = type_params(n);
        let values = value_bindings(n);
        let tuple_ty = quote! { (#(#params,)*) };

        impls.push(quote! {
            impl<#(#params),*> Tuple for #tuple_ty {
                const LEN: usize = #n;
            }

            impl<#(#params),*> FixedLength for #tuple_ty {
                const LEN: usize = #n;
            }

            impl<#(#params),*> Qualified for #tuple_ty {
                type Qualifier = Value;
                type Unqualified = Self;
            }

            impl<#(#params),*> GetSize for #tuple_ty {
                #[inline]
                fn get_size(&self) -> usize {
                    <Self as FixedLength>::LEN
                }
            }
        });

        if n > 0 {
            let last_ty = &params[n - 1];
            let last_val = &values[n - 1];
            let pattern = (0..n).map(|i| {
                if i == n - 1 { quote! { #last_val } } else { quote! { _ } }
            });
            impls.push(quote! {
                impl<#(#params),*> Last for #tuple_ty {
                    type Last = #last_ty;

                    #[inline]
                    fn last(self) -> #last_ty {
                        let (#(#pattern,)*) = self;
                        #last_val
                    }
                }
            });
        }

        for begin in 0..=n {
            for count in 0..=(n - begin) {
                let range = begin..begin + count;
                let out_params = &params[range.clone()];
                let out_values = &values[range.clone()];
                let pattern = (0..n).map(|i| {
                    if range.contains(&i) {
                        let v = &values[i];
                        quote! { #v }
                    } else {
                        quote! { _ }
                    }
                });
                impls.push(quote! {
                    impl<#(#params),*> TupleSlice<#begin, #count> for #tuple_ty {
                        type Out = (#(#out_params,)*);

                        #[inline]
                        fn slice(self) -> Self::Out {
                            let (#(#pattern,)*) = self;
                            (#(#out_values,)*)
                        }
                    }
                });
            }
        }
    }

    quote! { #(#impls)* }
}
