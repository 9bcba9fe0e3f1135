//! Value representations for constructor arguments.
//!
//! [`Repr`] is the rule used to render a single constructor argument into the
//! captured call expression. It differs from [`std::fmt::Display`] only in
//! intent: `Display` is a description for a reader, whereas `Repr` aims for a
//! form a program could re-interpret into the value — quoted and escaped text,
//! floats that keep their decimal point, `Some(..)`/`None` spelled out.
//!
//! Augmented types get their `Repr` implementation from
//! `#[derive(Augmented)]`, which delegates to the cached call expression, so
//! nesting an augmented value inside another constructor renders recursively.
//!
//! # Example
//!
//! ```
//! use autorepr::Repr;
//!
//! assert_eq!(42_i32.repr_string(), "42");
//! assert_eq!("it's \"quoted\"".repr_string(), r#""it's \"quoted\"""#);
//! assert_eq!(Some(vec![1_u8, 2]).repr_string(), "Some([1, 2])");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be rendered into a captured call expression.
pub trait Repr {
    /// Append this value's representation to `out`.
    fn repr(&self, out: &mut String);

    /// Render into a fresh string. Provided for callers that hold a single
    /// value rather than a buffer being assembled.
    fn repr_string(&self) -> String {
        let mut out = String::new();
        self.repr(&mut out);
        out
    }
}

// ============================================================================
// Primitives
// ============================================================================

macro_rules! impl_repr_for_int {
    ($($ty:ty),*) => {
        $(
            impl Repr for $ty {
                fn repr(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }
        )*
    };
}

impl_repr_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_repr_for_float {
    ($($ty:ty),*) => {
        $(
            impl Repr for $ty {
                // {:?} keeps the decimal point on whole values ("4.0", not
                // "4"), so the rendered literal stays a float when re-read.
                fn repr(&self, out: &mut String) {
                    out.push_str(&format!("{:?}", self));
                }
            }
        )*
    };
}

impl_repr_for_float!(f32, f64);

impl Repr for bool {
    fn repr(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl Repr for char {
    fn repr(&self, out: &mut String) {
        out.push_str(&format!("{:?}", self));
    }
}

impl Repr for str {
    fn repr(&self, out: &mut String) {
        out.push_str(&format!("{:?}", self));
    }
}

impl Repr for String {
    fn repr(&self, out: &mut String) {
        self.as_str().repr(out);
    }
}

impl Repr for () {
    fn repr(&self, out: &mut String) {
        out.push_str("()");
    }
}

// ============================================================================
// Containers
// ============================================================================

impl<T: Repr> Repr for Option<T> {
    fn repr(&self, out: &mut String) {
        match self {
            Some(value) => {
                out.push_str("Some(");
                value.repr(out);
                out.push(')');
            }
            None => out.push_str("None"),
        }
    }
}

impl<T: Repr> Repr for [T] {
    fn repr(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.repr(out);
        }
        out.push(']');
    }
}

impl<T: Repr> Repr for Vec<T> {
    fn repr(&self, out: &mut String) {
        self.as_slice().repr(out);
    }
}

impl<T: Repr, const N: usize> Repr for [T; N] {
    fn repr(&self, out: &mut String) {
        self.as_slice().repr(out);
    }
}

macro_rules! impl_repr_for_tuple {
    ($len:literal => $(($name:ident, $idx:tt)),+) => {
        impl<$($name: Repr),+> Repr for ($($name,)+) {
            fn repr(&self, out: &mut String) {
                out.push('(');
                let mut first = true;
                $(
                    if !first {
                        out.push_str(", ");
                    }
                    first = false;
                    self.$idx.repr(out);
                )+
                let _ = first;
                // one-element tuples keep their trailing comma so the
                // rendered form stays distinct from a parenthesized value
                if $len == 1 {
                    out.push(',');
                }
                out.push(')');
            }
        }
    };
}

impl_repr_for_tuple!(1 => (A, 0));
impl_repr_for_tuple!(2 => (A, 0), (B, 1));
impl_repr_for_tuple!(3 => (A, 0), (B, 1), (C, 2));
impl_repr_for_tuple!(4 => (A, 0), (B, 1), (C, 2), (D, 3));

// Maps render as `{key: value, ...}` — descriptive rather than re-evaluable,
// the accepted shape for arguments without a literal form. HashMap iteration
// order is unspecified; BTreeMap output is deterministic.
impl<K: Repr, V: Repr> Repr for BTreeMap<K, V> {
    fn repr(&self, out: &mut String) {
        repr_entries(self.iter(), out);
    }
}

impl<K: Repr, V: Repr> Repr for HashMap<K, V> {
    fn repr(&self, out: &mut String) {
        repr_entries(self.iter(), out);
    }
}

fn repr_entries<'a, K: Repr + 'a, V: Repr + 'a>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
    out: &mut String,
) {
    out.push('{');
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        key.repr(out);
        out.push_str(": ");
        value.repr(out);
    }
    out.push('}');
}

// ============================================================================
// References and smart pointers
// ============================================================================

impl<T: Repr + ?Sized> Repr for &T {
    fn repr(&self, out: &mut String) {
        (**self).repr(out);
    }
}

impl<T: Repr + ?Sized> Repr for &mut T {
    fn repr(&self, out: &mut String) {
        (**self).repr(out);
    }
}

impl<T: Repr + ?Sized> Repr for Box<T> {
    fn repr(&self, out: &mut String) {
        (**self).repr(out);
    }
}

impl<T: Repr + ?Sized> Repr for Rc<T> {
    fn repr(&self, out: &mut String) {
        (**self).repr(out);
    }
}

impl<T: Repr + ?Sized> Repr for Arc<T> {
    fn repr(&self, out: &mut String) {
        (**self).repr(out);
    }
}

impl<T> Repr for Cow<'_, T>
where
    T: Repr + ToOwned + ?Sized,
{
    fn repr(&self, out: &mut String) {
        self.as_ref().repr(out);
    }
}
