use super::error::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde settings already written on the struct by hand.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands the `#[api_model]` attribute macro.
///
/// Adds the missing `Debug`/`Serialize`/`Deserialize` derives and applies the wire
/// policy shared by every payload exchanged with the user service: camelCase keys
/// and strict field checking unless explicitly relaxed.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match expand(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let existing = existing_serde(&input.attrs)?;

    let derive_attr = derive_attr(&input.attrs);
    let rename_attr = rename_attr(args.rename_all, existing.rename_all.as_ref())?;
    let deny_attr = deny_attr(args.deny_unknown_fields, existing.deny_unknown_fields, input)?;

    Ok(quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input
    })
}

fn parse_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if pair.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&pair, "rename_all must be a string literal")? else {
                return Err(syn::Error::new_spanned(
                    &pair.value,
                    "rename_all must be a string literal",
                ));
            };
            set_once(&mut parsed.rename_all, value, &pair)?;
        } else if pair.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&pair, "deny_unknown_fields must be a boolean literal")?
            else {
                return Err(syn::Error::new_spanned(
                    &pair.value,
                    "deny_unknown_fields must be a boolean literal",
                ));
            };
            set_once(&mut parsed.deny_unknown_fields, value.value, &pair)?;
        } else {
            return Err(syn::Error::new_spanned(
                pair.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(pair: &MetaNameValue, message: &str) -> syn::Result<Lit> {
    match &pair.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, message)),
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, pair: &MetaNameValue) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(pair, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<ExistingSerde> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            }
            Ok(())
        })?;
    }

    Ok(existing)
}

fn derive_attr(attrs: &[Attribute]) -> TokenStream {
    let present = derived_trait_names(attrs);
    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !present.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn rename_attr(requested: Option<LitStr>, existing: Option<&LitStr>) -> syn::Result<TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));

    match existing {
        Some(existing) if existing.value() != requested.value() => Err(syn::Error::new_spanned(
            existing,
            "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #requested)] }),
    }
}

fn deny_attr(
    requested: Option<bool>,
    already_denied: bool,
    input: &ItemStruct,
) -> syn::Result<TokenStream> {
    let deny = requested.unwrap_or(true);

    match (already_denied, deny) {
        (true, false) => Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (true, true) | (false, false) => Ok(quote! {}),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
    }
}
