//! Procedural macros for histo-caps.
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `impl_tuples!(N)` | - | Tuple length, last element and slicing impls up to arity `N` |
//! | `#[structural]` | inherent impl | Implement capability traits for recognised methods |
//!
//! ## Example
//!
//! ```ignore
//! struct Regular { n: i32 }
//!
//! #[structural]
//! impl Regular {
//!     fn index(&self, x: f64) -> i32 { x as i32 }
//!     fn size(&self) -> i32 { self.n }
//! }
//!
//! assert!(is_axis!(Regular));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod inner;
mod user;

/// Generate per-arity tuple impls for `0..=N`.
///
/// The traits `Tuple`, `FixedLength`, `Qualified`, `GetSize`, `Last` and
/// `TupleSlice`, and the `Value` descriptor, must be in scope at the call site.
///
/// # Usage
/// ```ignore
/// impl_tuples!(8);
/// ```
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuples::TuplesInput);
    inner::tuples::expand_tuples(input).into()
}

/// Implement the matching `histo_caps::capability` traits for each method
/// of an inherent impl block that has a recognised name and signature.
///
/// Methods that do not match are kept as written and produce no impl.
#[proc_macro_attribute]
pub fn structural(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, "#[structural] takes no arguments")
            .to_compile_error()
            .into();
    }
    let item = parse_macro_input!(item as syn::ItemImpl);
    user::structural::expand_structural(item).into()
}
