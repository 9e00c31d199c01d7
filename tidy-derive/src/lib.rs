//! Derive per-field keypath accessors for use with [tidy].
//!
//! `#[derive(Paths)]` on a struct generates, for every field, a writable
//! accessor `Type::field()` returning `tidy::FieldPathMut<Self, FieldTy>`
//! and a readable accessor `Type::field_r()` returning
//! `tidy::FieldPath<Self, FieldTy>`. Tuple struct fields get positional
//! names (`f0()`, `f0_r()`, ...). The writable accessor is what the chain
//! operations and the `path!` macro consume.
//!
//! [tidy]: https://docs.rs/tidy

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Index, parse_macro_input};

#[proc_macro_derive(Paths)]
pub fn derive_paths(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Paths can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut methods = proc_macro2::TokenStream::new();
    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                let ident = field.ident.as_ref().expect("named field");
                let ty = &field.ty;
                let r_fn = format_ident!("{}_r", ident);
                methods.extend(quote! {
                    pub fn #ident() -> tidy::FieldPathMut<Self, #ty> {
                        tidy::WritableKeyPath::new(|root: &mut Self| &mut root.#ident)
                    }

                    pub fn #r_fn() -> tidy::FieldPath<Self, #ty> {
                        tidy::KeyPath::new(|root: &Self| &root.#ident)
                    }
                });
            }
        }
        Fields::Unnamed(unnamed) => {
            for (idx, field) in unnamed.unnamed.iter().enumerate() {
                let ty = &field.ty;
                let index = Index::from(idx);
                let w_fn = format_ident!("f{}", idx);
                let r_fn = format_ident!("f{}_r", idx);
                methods.extend(quote! {
                    pub fn #w_fn() -> tidy::FieldPathMut<Self, #ty> {
                        tidy::WritableKeyPath::new(|root: &mut Self| &mut root.#index)
                    }

                    pub fn #r_fn() -> tidy::FieldPath<Self, #ty> {
                        tidy::KeyPath::new(|root: &Self| &root.#index)
                    }
                });
            }
        }
        Fields::Unit => {}
    }

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #methods
        }
    }
    .into()
}
