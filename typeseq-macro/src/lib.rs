//! Procedural macros which generate the per-arity impl tables of the `typeseq` crate.
//!
//! Rust has no variadic generics, so every conversion between a flat tuple and its inductive list,
//! and between a `usize` constant and its unary representation, needs one impl per size. These
//! macros write those impls out. They are invoked from inside `typeseq` itself, and the code they
//! emit refers to `Tuple`, `List`, `Number`, `ToUnary`, `ToConstant`, `S` and `Z` as names in the
//! caller's scope.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{parse_macro_input, LitInt},
};

/// Parse the single integer literal given to each of these macros.
fn parse_bound(lit: &LitInt) -> syn::Result<usize> {
    let bound = lit.base10_parse::<usize>()?;
    if bound > 512 {
        return Err(syn::Error::new(
            lit.span(),
            "refusing to generate impls for more than 512 sizes",
        ));
    }
    Ok(bound)
}

/// Generate `Tuple` and `List` impls for every tuple arity from `0` up to and including the given
/// bound.
///
/// For arity 3 this produces, modulo naming:
///
/// ```ignore
/// impl<T0, T1, T2> Tuple for (T0, T1, T2) {
///     type AsList = (T0, (T1, (T2, ())));
///     fn into_list(self) -> Self::AsList { ... }
/// }
///
/// impl<T0, T1, T2> List for (T0, (T1, (T2, ()))) {
///     type AsTuple = (T0, T1, T2);
///     fn into_tuple(self) -> Self::AsTuple { ... }
/// }
/// ```
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    let bound = match parse_bound(&lit) {
        Ok(bound) => bound,
        Err(e) => return e.to_compile_error().into(),
    };

    let impls = (0..=bound).map(tuple_impls);
    quote!(#(#impls)*).into()
}

fn tuple_impls(arity: usize) -> TokenStream2 {
    let tys = (0..arity).map(|i| format_ident!("T{}", i)).collect::<Vec<_>>();
    let vals = (0..arity).map(|i| format_ident!("t{}", i)).collect::<Vec<_>>();

    // Build the inductive list right to left, for both the type and its value-level pattern.
    let mut list_ty = quote!(());
    let mut list_val = quote!(());
    for (ty, val) in tys.iter().zip(vals.iter()).rev() {
        list_ty = quote!((#ty, #list_ty));
        list_val = quote!((#val, #list_val));
    }

    quote! {
        impl<#(#tys),*> Tuple for (#(#tys,)*) {
            type AsList = #list_ty;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let (#(#vals,)*) = self;
                #list_val
            }
        }

        impl<#(#tys),*> List for #list_ty {
            type AsTuple = (#(#tys,)*);

            #[inline]
            #[allow(clippy::unused_unit)]
            fn into_tuple(self) -> Self::AsTuple {
                let #list_val = self;
                (#(#vals,)*)
            }
        }
    }
}

/// Generate `ToUnary` and `ToConstant` impls linking `Number<N>` to its unary representation, for
/// every `N` from `0` up to and including the given bound.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    let bound = match parse_bound(&lit) {
        Ok(bound) => bound,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut unary = quote!(Z);
    let mut impls = Vec::with_capacity(bound + 1);
    for n in 0..=bound {
        let constant = Literal::usize_unsuffixed(n);
        impls.push(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#constant>;
            }
        });
        unary = quote!(S<#unary>);
    }

    quote!(#(#impls)*).into()
}
