//! Shared utilities for enclosure procedural macros
//!
//! Attribute parsing and cache-key generation for `#[memoize]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{punctuated::Punctuated, Expr, MetaNameValue, Token};

/// Parsed `#[memoize(...)]` attributes
pub struct MemoizeAttributes {
    /// `Some(n)` or `None` as tokens, passed to `FifoStore::new`
    pub limit: TokenStream2,
    pub custom_name: Option<String>,
}

impl Default for MemoizeAttributes {
    fn default() -> Self {
        Self {
            limit: quote! { ::core::option::Option::None },
            custom_name: None,
        }
    }
}

/// Parse the `limit` attribute
pub fn parse_limit_attribute(nv: &MetaNameValue) -> Result<TokenStream2, TokenStream2> {
    match &nv.value {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            syn::Lit::Int(lit_int) => match lit_int.base10_parse::<usize>() {
                Ok(val) => Ok(quote! { ::core::option::Option::Some(#val) }),
                Err(_) => Err(quote! { compile_error!("`limit` must be a non-negative integer") }),
            },
            _ => Err(quote! { compile_error!("Invalid literal for `limit`: expected integer") }),
        },
        _ => Err(quote! { compile_error!("Invalid syntax for `limit`: expected `limit = <integer>`") }),
    }
}

/// Parse the `name` attribute
pub fn parse_name_attribute(nv: &MetaNameValue) -> Result<String, TokenStream2> {
    match &nv.value {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            syn::Lit::Str(s) => Ok(s.value()),
            _ => Err(quote! { compile_error!("Invalid literal for `name`: expected string") }),
        },
        _ => Err(quote! { compile_error!("Invalid syntax for `name`: expected `name = \"...\"`") }),
    }
}

/// Generate the cache key expression from the function arguments.
///
/// Each argument (and `self` for methods) is rendered with `CacheableKey`
/// and the parts are joined with `|`.
pub fn generate_key_expr(has_self: bool, arg_pats: &[TokenStream2]) -> TokenStream2 {
    if !has_self && arg_pats.is_empty() {
        return quote! {{ ::std::string::String::new() }};
    }

    let self_part = if has_self {
        quote! { __key_parts.push(::enclosure::__private::CacheableKey::to_cache_key(&self)); }
    } else {
        quote! {}
    };

    quote! {{
        let mut __key_parts: ::std::vec::Vec<::std::string::String> = ::std::vec::Vec::new();
        #self_part
        #(
            __key_parts.push(::enclosure::__private::CacheableKey::to_cache_key(&#arg_pats));
        )*
        __key_parts.join("|")
    }}
}

/// Parse `#[memoize]` attributes from a token stream
pub fn parse_memoize_attributes(attr: TokenStream2) -> Result<MemoizeAttributes, TokenStream2> {
    use syn::parse::Parser;

    let parser = Punctuated::<MetaNameValue, Token![,]>::parse_terminated;
    let parsed_args = parser.parse2(attr).map_err(|e| {
        let msg = format!("Failed to parse attributes: {}", e);
        quote! { compile_error!(#msg) }
    })?;

    let mut attrs = MemoizeAttributes::default();

    for nv in parsed_args {
        if nv.path.is_ident("limit") {
            attrs.limit = parse_limit_attribute(&nv)?;
        } else if nv.path.is_ident("name") {
            attrs.custom_name = Some(parse_name_attribute(&nv)?);
        } else {
            let path = &nv.path;
            let msg = format!(
                "Unknown attribute `{}`: expected `limit` or `name`",
                quote!(#path).to_string().replace(' ', "")
            );
            return Err(quote! { compile_error!(#msg) });
        }
    }

    Ok(attrs)
}
