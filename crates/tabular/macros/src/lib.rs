//! `#[derive(Record)]` for satchel-tabular.
//!
//! Implements the `Record` trait for named-field structs: `columns()`
//! lists the field names in declaration order; `cells()` renders each
//! field with its `Display` impl, substituting the `<nil>` literal for an
//! absent `Option` field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type, parse_macro_input};

/// Derives `satchel_tabular::Record` for a struct with named fields.
///
/// ```rust,ignore
/// use satchel_tabular::Record;
///
/// #[derive(Record)]
/// struct User {
///     id: u64,
///     name: String,
///     nickname: Option<String>, // renders "<nil>" when None
/// }
/// ```
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "#[derive(Record)] only supports structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            input.ident.span(),
            "#[derive(Record)] requires named fields",
        ));
    };

    let mut columns = Vec::new();
    let mut cells = Vec::new();
    for field in &fields.named {
        let ident = field.ident.as_ref().expect("named fields have idents");
        columns.push(ident.to_string());
        cells.push(if is_option(&field.ty) {
            quote! { ::satchel_tabular::opt_cell(self.#ident.as_ref()) }
        } else {
            quote! { ::satchel_tabular::cell(&self.#ident) }
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::satchel_tabular::Record for #name #ty_generics #where_clause {
            fn columns() -> &'static [&'static str] {
                &[#(#columns),*]
            }

            fn cells(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#cells),*]
            }
        }
    })
}

/// Syntactic `Option<T>` detection: matches `Option`, `option::Option`,
/// `std::option::Option`, and `core::option::Option`.
fn is_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }
    let segments: Vec<String> = type_path
        .path
        .segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect();
    matches!(
        segments
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .as_slice(),
        ["Option"] | ["option", "Option"] | ["std", "option", "Option"]
            | ["core", "option", "Option"]
    )
}
