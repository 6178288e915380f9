#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate provides attribute macros that remove the boilerplate shared by the
//! client crates: runtime bootstrap, wire models and error enums.
//!
//! ## Usage
//! Depend on the crate through the workspace:
//! ```toml
//! [dependencies]
//! nwatch-derive.workspace = true
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the client Tokio runtime.
///
/// Transforms an `async fn main` into a standard `fn main` that builds a runtime
/// from the selected [`RuntimeConfig`] preset and blocks on the body.
///
/// # Arguments
///
/// * `event_loop` - Single-threaded cooperative runtime (front-ends).
/// * `multi_thread` - Multithreaded scheduler sized from available parallelism.
/// * `default` - Same as `event_loop`.
///
/// # Examples
///
/// ```rust,ignore
/// #[nwatch_runtime::main(event_loop)]
/// async fn main() -> anyhow::Result<()> {
/// # Ok(())
/// }
/// ```
///
/// [`RuntimeConfig`]: https://docs.rs/nwatch-runtime
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro to define a wire model exchanged with the user service.
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `Serialize`, and `Deserialize` if missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Example
///
/// ```rust,ignore
/// use nwatch_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct CreatedUser {
///     pub id: i64,
///     pub full_name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`, and a context field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use nwatch_derive::nwatch_error;
/// use std::borrow::Cow;
///
/// #[nwatch_error]
/// pub enum GatewayError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn send(client: &reqwest::Client) -> Result<(), GatewayError> {
///     client.get(url).build().context("Building request")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn nwatch_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
