//! autorepr gives a type self-describing textual representations with no
//! hand-written rendering code: constructor arguments are captured when an
//! instance is built, formatted once into the call expression that would
//! rebuild it — `Point(3, y = 4)` — cached on the instance, and returned
//! whenever the representation is requested.
//!
//! # Overview
//!
//! Two macros do the installing:
//!
//! - `#[derive(Augmented)]` wires the rendering entry point: it implements
//!   [`Augmented`] (cache access + [`render`](Augmented::render)),
//!   [`std::fmt::Display`], and [`Repr`] for the struct. The struct declares
//!   one [`ReprCache`] field to hold the captured expression.
//! - `#[augment]` on the inherent impl block wraps every constructor
//!   (associated fn returning `Self` or `Result<Self, E>`) so the raw
//!   arguments are rendered through [`Repr`] before the body runs, and the
//!   result is primed into the instance's cache afterwards. Parameters
//!   marked `#[named]` render as `name = value`.
//!
//! Arguments that are themselves augmented render recursively through their
//! own cached expression, so `Outer::new(Inner::new('x'))` renders as
//! `Outer(Inner('x'))`. Where every argument is itself rebuildable from its
//! representation and equality compares fields, re-invoking the rendered
//! expression reconstructs an equal value; for opaque arguments the output
//! stays descriptive, best-effort.
//!
//! The cache is written exactly once and never recomputed: mutating fields
//! after construction does not change the rendering, and construction routes
//! that bypass the wrapped constructors (struct literals, `Clone`,
//! deserialization) are not re-captured.

extern crate self as autorepr;

pub mod augmented;
pub mod cache;
pub mod capture;
pub mod repr;

pub use augmented::Augmented;
pub use cache::{CaptureError, ReprCache};
pub use capture::CallCapture;
pub use repr::Repr;

#[cfg(feature = "derive")]
pub use autorepr_derive::{Augmented, augment};
