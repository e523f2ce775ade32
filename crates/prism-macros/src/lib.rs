//! Procedural macros used by `prism-linalg`.
//!
//! Do not use this crate directly, use `prism-linalg` instead.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse::Error, LitInt};

/// Component naming families. Every family names the same storage slots.
const FAMILIES: &[&str] = &["xyzw", "rgba", "stpq"];

/// Generates the swizzle accessors of `Vector<T, N>` for the given dimension.
///
/// For every index tuple of length `N` drawn from `0..N`, and for every naming family, this emits
/// a read accessor returning a `Swizzle` (or a `Splat` if all indices are equal) and, for
/// non-degenerate tuples, a `_mut` accessor returning a write-through `SwizzleMut`.
///
/// Must be invoked from inside `prism-linalg`, since the expansion refers to `crate::` paths.
#[proc_macro]
pub fn swizzles(input: TokenStream) -> TokenStream {
    match expand_swizzles(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_swizzles(input: TokenStream) -> syn::Result<TokenStream2> {
    let lit = syn::parse::<LitInt>(input)?;
    let dim = lit.base10_parse::<usize>()?;
    if !(2..=4).contains(&dim) {
        return Err(Error::new(
            lit.span(),
            "`swizzles!` only supports vectors with 2, 3 or 4 dimensions",
        ));
    }

    let mut methods = Vec::new();
    for indices in index_tuples(dim) {
        for family in FAMILIES {
            methods.push(accessors(dim, &indices, family));
        }
    }

    Ok(quote! {
        /// Swizzle accessors.
        impl<T> crate::Vector<T, #dim> {
            #(#methods)*
        }
    })
}

/// Enumerates all `dim^dim` index tuples, in lexicographic order.
fn index_tuples(dim: usize) -> Vec<Vec<usize>> {
    let mut tuples = vec![Vec::new()];
    for _ in 0..dim {
        tuples = tuples
            .into_iter()
            .flat_map(|prefix| {
                (0..dim).map(move |i| {
                    let mut tuple = prefix.clone();
                    tuple.push(i);
                    tuple
                })
            })
            .collect();
    }
    tuples
}

fn accessors(dim: usize, indices: &[usize], family: &str) -> TokenStream2 {
    let letters = family.as_bytes();
    let name: String = indices.iter().map(|&i| char::from(letters[i])).collect();
    let read = Ident::new(&name, Span::call_site());

    let first = indices[0];
    if indices.iter().all(|&i| i == first) {
        let doc = format!(
            "Returns a read-only view broadcasting component `{}` into all {dim} positions.",
            char::from(letters[first]),
        );
        return quote! {
            #[doc = #doc]
            #[inline]
            pub fn #read(&self) -> crate::Splat<'_, T, #dim, #first> {
                crate::Splat::new(self)
            }
        };
    }

    let write = format_ident!("{}_mut", name);
    let pattern = pattern_type(indices);
    let read_doc = format!("Returns a read-only `{name}` swizzle view (indices `{indices:?}`).");
    let write_doc = format!("Returns a write-through `{name}` swizzle view (indices `{indices:?}`).");
    quote! {
        #[doc = #read_doc]
        #[inline]
        pub fn #read(&self) -> crate::Swizzle<'_, T, #dim, #pattern> {
            crate::Swizzle::new(self)
        }

        #[doc = #write_doc]
        #[inline]
        pub fn #write(&mut self) -> crate::SwizzleMut<'_, T, #dim, #pattern> {
            crate::SwizzleMut::new(self)
        }
    }
}

fn pattern_type(indices: &[usize]) -> TokenStream2 {
    let marker = format_ident!("Idx{}", indices.len());
    quote!(crate::swizzle::#marker<#(#indices),*>)
}
