//! The augmented-type surface.
//!
//! [`Augmented`] is implemented by `#[derive(Augmented)]`; its provided
//! [`render`](Augmented::render) method is the rendering entry point: it
//! returns the call expression captured at construction time. A type that
//! wants a different rendering supplies one through
//! `#[augmented(render_with = "path")]`, which replaces `render` in the
//! generated impl — the override then wins everywhere the entry point is
//! consulted (the generated `Display` and `Repr` impls both go through it),
//! while the cache is still captured and stored, just never read.
//!
//! # Example
//!
//! ```
//! use autorepr::{augment, Augmented, ReprCache};
//!
//! #[derive(Augmented)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//!     repr: ReprCache,
//! }
//!
//! #[augment]
//! impl Point {
//!     pub fn new(x: i64, #[named] y: i64) -> Self {
//!         Point { x, y, repr: ReprCache::new() }
//!     }
//! }
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.render(), "Point(3, y = 4)");
//! assert_eq!(p.to_string(), "Point(3, y = 4)");
//! ```

use crate::cache::ReprCache;

/// A type whose instances carry a self-describing call expression.
pub trait Augmented {
    /// Access this instance's representation cache.
    fn repr_cache(&self) -> &ReprCache;

    /// The bare name of the concrete type, as it leads the rendered call
    /// expression. Generics are elided: `Pair<T>` renders as `Pair`.
    fn type_name() -> &'static str
    where
        Self: Sized;

    /// The rendering entry point.
    ///
    /// The default returns the cached call expression. Instances built
    /// around the wrapped constructors have nothing cached and fall back to
    /// `TypeName(..)` — those routes are not intercepted, only described.
    fn render(&self) -> String
    where
        Self: Sized,
    {
        match self.repr_cache().rendered() {
            Some(rendered) => rendered.to_owned(),
            None => format!("{}(..)", Self::type_name()),
        }
    }
}
