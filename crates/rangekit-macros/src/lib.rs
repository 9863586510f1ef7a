//! Proc-macros for rangekit.
//!
//! Currently provided:
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field in a struct.
//!
//! ## Field control
//! - `#[with_builders(skip)]` excludes a field from builder generation.
//! - `#[with_builders(non_negative)]` clamps negative inputs to zero before
//!   storing them. Meant for float fields such as radii and thicknesses.
//!
//! ### Example
//! ```ignore
//! use rangekit_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, WithBuilders)]
//! pub struct SliderStyle {
//!     #[with_builders(non_negative)]
//!     pub handle_radius: f64,
//!     #[with_builders(skip)]
//!     pub debug_only: bool,
//! }
//!
//! let s = SliderStyle { handle_radius: 15.0, debug_only: false }
//!     .with_handle_radius(-3.0);
//! assert_eq!(s.handle_radius, 0.0);
//! // .with_debug_only(...) is NOT generated.
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};

/// Options parsed from `#[with_builders(...)]` on a single field
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    non_negative: bool,
}

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style) and return `Self`.
///
/// Field attributes:
/// - `#[with_builders(skip)]`: do not generate a builder method for this field.
/// - `#[with_builders(non_negative)]`: replace negative (and NaN) inputs with `0.0`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in fields_named.named.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let options = match field_options(field) {
            Ok(options) => options,
            Err(err) => return err.to_compile_error().into(),
        };
        if options.skip {
            continue;
        }

        let field_ty = &field.ty;
        let method_ident = format_ident!("with_{}", field_ident);

        let store = if options.non_negative {
            // `!(value >= 0.0)` also catches NaN
            quote! {
                self.#field_ident = if !(value >= 0.0) { 0.0 } else { value };
            }
        } else {
            quote! {
                self.#field_ident = value;
            }
        };

        methods.push(quote! {
            #[inline]
            pub fn #method_ident(mut self, value: #field_ty) -> Self {
                #store
                self
            }
        });
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

fn field_options(field: &syn::Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("with_builders") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("non_negative") {
                options.non_negative = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `non_negative`"))
            }
        })?;
    }

    Ok(options)
}
