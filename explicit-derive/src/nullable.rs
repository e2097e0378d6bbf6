//! Implementation of the `#[derive(Nullable)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, LitStr, PathArguments,
    Type, parse_macro_input,
};

/// Main implementation of the Nullable derive macro.
pub fn derive_nullable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

/// A `delegate(method = "..", returns = "..")` entry.
struct Delegate {
    method: Ident,
    returns: Type,
}

/// Parsed `#[nullable(..)]` attributes of one field.
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    rename: Option<Ident>,
    delegates: Vec<Delegate>,
}

impl FieldOptions {
    const fn is_empty(&self) -> bool {
        !self.skip && self.rename.is_none() && self.delegates.is_empty()
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => &named_fields.named,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Nullable can only be derived for structs with named fields, not tuple structs.",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Nullable cannot be derived for unit structs (structs with no fields).",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Nullable can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Nullable cannot be derived for unions.",
            ));
        }
    };

    let mut accessors = Vec::new();
    for field in fields {
        accessors.push(generate_accessors(field)?);
    }

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#accessors)*
        }
    })
}

/// Generates the accessor and delegate methods of one field.
fn generate_accessors(field: &Field) -> syn::Result<TokenStream2> {
    let options = parse_field_options(&field.attrs)?;
    let Some(field_name) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };

    let Some(inner_type) = option_inner_type(&field.ty) else {
        if options.is_empty() {
            return Ok(TokenStream2::new());
        }
        return Err(syn::Error::new_spanned(
            &field.ty,
            "#[nullable] attributes only apply to Option fields.",
        ));
    };

    if options.skip {
        return Ok(TokenStream2::new());
    }

    let accessor = options.rename.unwrap_or_else(|| field_name.clone());
    let accessor_doc = format!("Returns the `{field_name}` field as a `Maybe`.");

    let delegates = options.delegates.iter().map(|delegate| {
        let method = &delegate.method;
        let returns = &delegate.returns;
        let delegate_name = format_ident!("{}_{}", accessor, method);
        let delegate_doc = format!("Calls `{method}` on the `{field_name}` field, if present.");
        quote! {
            #[doc = #delegate_doc]
            #[inline]
            pub fn #delegate_name(&self) -> ::explicit::control::Maybe<#returns> {
                self.#accessor().map(|value| value.#method())
            }
        }
    });

    Ok(quote! {
        #[doc = #accessor_doc]
        #[inline]
        pub fn #accessor(&self) -> ::explicit::control::Maybe<&#inner_type> {
            ::explicit::control::Maybe::from(self.#field_name.as_ref())
        }

        #(#delegates)*
    })
}

/// Returns `T` if `ty` is spelled `Option<T>` (optionally path-qualified).
fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    if arguments.args.len() != 1 {
        return None;
    }
    match arguments.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn parse_field_options(attributes: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("nullable")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                options.rename = Some(name.parse()?);
                Ok(())
            } else if meta.path.is_ident("delegate") {
                options.delegates.push(parse_delegate(&meta)?);
                Ok(())
            } else {
                Err(meta.error("expected `skip`, `rename = \"..\"` or `delegate(..)`"))
            }
        })?;
    }

    Ok(options)
}

fn parse_delegate(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<Delegate> {
    let mut method = None;
    let mut returns = None;

    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("method") {
            let name: LitStr = inner.value()?.parse()?;
            method = Some(name.parse::<Ident>()?);
            Ok(())
        } else if inner.path.is_ident("returns") {
            let ty: LitStr = inner.value()?.parse()?;
            returns = Some(ty.parse::<Type>()?);
            Ok(())
        } else {
            Err(inner.error("expected `method = \"..\"` or `returns = \"..\"`"))
        }
    })?;

    match (method, returns) {
        (Some(method), Some(returns)) => Ok(Delegate { method, returns }),
        _ => Err(meta.error("delegate requires both `method` and `returns`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn methods(input: &DeriveInput) -> Vec<(String, String)> {
        let tokens = expand(input).expect("expansion should succeed");
        let item: syn::ItemImpl = syn::parse2(tokens).expect("expansion should be an impl block");
        item.items
            .iter()
            .filter_map(|item| match item {
                syn::ImplItem::Fn(method) => {
                    let output = &method.sig.output;
                    Some((method.sig.ident.to_string(), quote!(#output).to_string()))
                }
                _ => None,
            })
            .collect()
    }

    fn return_type(tokens: TokenStream2) -> String {
        tokens.to_string()
    }

    #[rstest]
    fn test_generates_accessor_for_option_field() {
        let input: DeriveInput = parse_quote! {
            struct User {
                id: u64,
                email: Option<String>,
            }
        };
        assert_eq!(
            methods(&input),
            vec![(
                "email".to_string(),
                return_type(quote!(-> ::explicit::control::Maybe<&String>))
            )]
        );
    }

    #[rstest]
    fn test_rename_and_delegate() {
        let input: DeriveInput = parse_quote! {
            struct User {
                #[nullable(rename = "mail", delegate(method = "len", returns = "usize"))]
                email: Option<String>,
            }
        };
        assert_eq!(
            methods(&input),
            vec![
                (
                    "mail".to_string(),
                    return_type(quote!(-> ::explicit::control::Maybe<&String>))
                ),
                (
                    "mail_len".to_string(),
                    return_type(quote!(-> ::explicit::control::Maybe<usize>))
                ),
            ]
        );
    }

    #[rstest]
    fn test_skip_suppresses_accessor() {
        let input: DeriveInput = parse_quote! {
            struct User {
                #[nullable(skip)]
                email: Option<String>,
                #[nullable(delegate(method = "len", returns = "usize"))]
                #[nullable(delegate(method = "is_empty", returns = "bool"))]
                notes: Option<Vec<String>>,
            }
        };
        let names: Vec<String> = methods(&input).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["notes", "notes_len", "notes_is_empty"]);
    }

    #[rstest]
    #[case(parse_quote! { enum Shape { Circle } }, "not enums")]
    #[case(parse_quote! { struct Pair(Option<i32>, i32); }, "not tuple structs")]
    #[case(parse_quote! { struct Marker; }, "unit structs")]
    #[case(parse_quote! { struct User { #[nullable(skip)] id: u64 } }, "only apply to Option fields")]
    #[case(parse_quote! { struct User { #[nullable(delegate(method = "len"))] a: Option<String> } }, "requires both")]
    fn test_rejects_invalid_input(#[case] input: DeriveInput, #[case] message: &str) {
        let error = expand(&input).unwrap_err();
        assert!(error.to_string().contains(message), "{error}");
    }

    #[rstest]
    #[case(parse_quote!(Option<u8>), true)]
    #[case(parse_quote!(std::option::Option<u8>), true)]
    #[case(parse_quote!(Vec<u8>), false)]
    #[case(parse_quote!(Option), false)]
    fn test_option_inner_type(#[case] ty: Type, #[case] is_option: bool) {
        assert_eq!(option_inner_type(&ty).is_some(), is_option);
    }
}
