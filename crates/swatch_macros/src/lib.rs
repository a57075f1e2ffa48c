use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Meta, Type, parse_macro_input, spanned::Spanned};

/// Generates `resolve(&self, &ThemeObject) -> &Field` for an enum whose
/// variants each name a field path inside `swatch_theme::ThemeObject`.
///
/// ```ignore
/// #[derive(IntoThemeField)]
/// #[field(swatch_theme::PaletteColor)]
/// enum Accent {
///     #[theme(palette.primary)]
///     Brand,
///     #[theme(palette.error)]
///     Danger,
/// }
/// ```
#[proc_macro_derive(IntoThemeField, attributes(theme, field))]
pub fn into_theme_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "#[derive(IntoThemeField)] can only be used on enums",
        ));
    };

    let field_type = enum_field_type(&input)?;

    let variant_matches = data_enum
        .variants
        .iter()
        .map(|variant| {
            if !variant.fields.is_empty() {
                return Err(syn::Error::new(
                    variant.span(),
                    "IntoThemeField variants can't carry data",
                ));
            }

            let ident = &variant.ident;
            let field_path = theme_expr(variant.span(), &variant.attrs)?;

            Ok(quote! {
                #name::#ident => &theme.#field_path,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub fn resolve<'a>(&self, theme: &'a ::swatch_theme::ThemeObject) -> &'a #field_type {
                match self {
                    #(#variant_matches)*
                }
            }
        }
    })
}

fn theme_expr(span: proc_macro2::Span, attrs: &[Attribute]) -> syn::Result<Expr> {
    let theme_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("theme"))
        .ok_or_else(|| syn::Error::new(span, "variant is missing a #[theme(...)] attribute"))?;

    match &theme_attr.meta {
        Meta::List(list) => syn::parse2(list.tokens.clone()),
        other => Err(syn::Error::new(
            other.span(),
            "#[theme(...)] must be a list, like #[theme(palette.primary)]",
        )),
    }
}

fn enum_field_type(input: &DeriveInput) -> syn::Result<Type> {
    let field_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("field"))
        .ok_or_else(|| {
            syn::Error::new(input.ident.span(), "enum is missing a #[field(...)] attribute")
        })?;

    match &field_attr.meta {
        Meta::List(meta_list) => syn::parse2::<Type>(meta_list.tokens.clone()),
        other => Err(syn::Error::new(
            other.span(),
            "#[field(...)] must be a list, like #[field(swatch_theme::TypeStyle)]",
        )),
    }
}
