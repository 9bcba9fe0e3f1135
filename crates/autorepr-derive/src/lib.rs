//! Derive and attribute macros for autorepr.
//!
//! This crate provides two proc-macros:
//!
//! - `#[derive(Augmented)]` - wires the rendering entry point for a struct
//!   (the `Augmented`, `Display`, and `Repr` impls)
//! - `#[augment]` - wraps the constructors in an inherent impl block so the
//!   arguments are captured and cached at construction time

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod attrs;
mod augment;
mod derive;
mod runtime_path;

/// Derive macro wiring a struct's rendering entry point.
///
/// The struct must have named fields, exactly one of which holds the
/// representation cache: either mark it `#[repr_cache]` or declare a single
/// field of type `ReprCache`. The generated code is:
///
/// - `impl Augmented` supplying the cache accessor and the concrete type
///   name (and, when `#[augmented(render_with = "path")]` is given, a
///   `render` that delegates to `path` instead of the cache);
/// - `impl std::fmt::Display` delegating to `render`;
/// - `impl Repr` delegating to `render`, so instances nest recursively
///   inside other captured constructor calls.
///
/// # Example
///
/// ```ignore
/// #[derive(Augmented)]
/// struct Point {
///     x: i64,
///     y: i64,
///     repr: ReprCache,
/// }
/// ```
///
/// # Container attributes
///
/// - `#[augmented(render_with = "path")]` - replace the default rendering
///   with `path(&self) -> String`; the cache is still captured but never
///   read
#[proc_macro_derive(Augmented, attributes(augmented, repr_cache))]
pub fn derive_augmented(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match derive::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Attribute macro wrapping the constructors of an inherent impl block.
///
/// Every associated function without a receiver that returns `Self` (or
/// `Result<Self, E>`) is rewritten to capture its arguments before the
/// original body runs and to prime the instance's cache afterwards; for
/// fallible constructors only the `Ok` value is primed and an `Err`
/// propagates unchanged. Other items in the block pass through untouched.
///
/// Parameters render positionally in signature order; a parameter marked
/// `#[named]` renders as `name = value` and must come after all positional
/// parameters. Every parameter type must implement `Repr`.
///
/// Applying the attribute twice double-wraps the constructors; both wraps
/// render the same text and the cache keeps the first, so nothing changes.
///
/// # Example
///
/// ```ignore
/// #[augment]
/// impl Point {
///     pub fn new(x: i64, #[named] y: i64) -> Self {
///         Point { x, y, repr: ReprCache::new() }
///     }
/// }
///
/// // Point::new(3, 4) renders as "Point(3, y = 4)"
/// ```
#[proc_macro_attribute]
pub fn augment(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(
            proc_macro2::TokenStream::from(attr),
            "#[augment] takes no arguments; hint: write it as a bare #[augment]",
        )
        .to_compile_error()
        .into();
    }
    let item = parse_macro_input!(item as syn::Item);
    match augment::expand(item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
