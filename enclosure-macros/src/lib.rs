use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, ReturnType};

use enclosure_macro_utils::{generate_key_expr, parse_memoize_attributes};

/// Generate the body of a memoized function backed by a process-wide
/// `FifoStore`
fn generate_memoized_body(
    ret_type: &TokenStream2,
    limit_expr: &TokenStream2,
    key_expr: &TokenStream2,
    block: &syn::Block,
    stats_name: &str,
) -> TokenStream2 {
    quote! {
        static __MEMO_CACHE: ::enclosure::__private::Lazy<
            ::enclosure::__private::Mutex<
                ::enclosure::__private::FifoStore<::std::string::String, #ret_type>
            >
        > = ::enclosure::__private::Lazy::new(|| {
            ::enclosure::__private::Mutex::new(::enclosure::__private::FifoStore::new(#limit_expr))
        });
        static __MEMO_STATS: ::enclosure::__private::CacheStats =
            ::enclosure::__private::CacheStats::new();
        static __MEMO_REGISTER: ::std::sync::Once = ::std::sync::Once::new();

        __MEMO_REGISTER.call_once(|| {
            ::enclosure::__private::register_stats(#stats_name, &__MEMO_STATS);
        });

        let __key = #key_expr;

        let __cached = __MEMO_CACHE.lock().get(&__key).cloned();
        if let ::core::option::Option::Some(__cached) = __cached {
            __MEMO_STATS.record_hit();
            return __cached;
        }
        __MEMO_STATS.record_miss();

        let __result = (|| #block)();
        __MEMO_CACHE
            .lock()
            .insert(__key, ::std::clone::Clone::clone(&__result));
        __result
    }
}

/// Memoizes a function or method: the attribute form of `memoize` and
/// `create_cache_decorator`.
///
/// Results are stored in a process-wide cache owned by the function, keyed by
/// the `CacheableKey` rendering of every argument (and of `self` for
/// methods). A repeated call with equal arguments returns the stored result
/// without running the body.
///
/// # Requirements
///
/// - **Arguments**: plain identifier patterns whose types implement
///   `CacheableKey` (every `Debug` type does)
/// - **Return type**: `Clone + Send + 'static`, not mentioning generic
///   parameters or `Self`
/// - **Function purity**: the body should depend only on its arguments
///
/// # Macro Parameters
///
/// - `limit` (optional): maximum number of stored results. When a new result
///   would exceed it, the oldest stored result is evicted first. Default:
///   unlimited.
/// - `name` (optional): name under which the cache's hit/miss statistics are
///   registered in `enclosure::stats_registry`. Default: the function name.
///
/// # Examples
///
/// ```ignore
/// use enclosure::memoize;
///
/// #[memoize]
/// fn fibonacci(n: u64) -> u64 {
///     if n <= 1 {
///         return n;
///     }
///     fibonacci(n - 1) + fibonacci(n - 2)
/// }
///
/// #[memoize(limit = 2, name = "doubler")]
/// fn expensive(x: i32) -> i32 {
///     x * 2
/// }
/// ```
#[proc_macro_attribute]
pub fn memoize(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attrs = match parse_memoize_attributes(attr.into()) {
        Ok(attrs) => attrs,
        Err(err) => return err.into(),
    };

    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let ident = &sig.ident;
    let block = &input.block;

    let ret_type = match &sig.output {
        ReturnType::Type(_, ty) => quote! { #ty },
        ReturnType::Default => quote! { () },
    };

    let mut arg_pats = Vec::new();
    let mut has_self = false;
    for arg in sig.inputs.iter() {
        match arg {
            FnArg::Receiver(_) => has_self = true,
            FnArg::Typed(pat_type) => match pat_type.pat.as_ref() {
                Pat::Ident(pat_ident) => {
                    let name = &pat_ident.ident;
                    arg_pats.push(quote! { #name });
                }
                _ => {
                    return quote! {
                        compile_error!("#[memoize] requires identifier patterns for every argument");
                    }
                    .into();
                }
            },
        }
    }

    let key_expr = generate_key_expr(has_self, &arg_pats);
    let stats_name = attrs.custom_name.unwrap_or_else(|| ident.to_string());

    let body = generate_memoized_body(&ret_type, &attrs.limit, &key_expr, block, &stats_name);

    let expanded = quote! {
        #(#fn_attrs)*
        #vis #sig {
            #body
        }
    };

    TokenStream::from(expanded)
}
