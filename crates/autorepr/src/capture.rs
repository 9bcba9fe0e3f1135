//! Formatting of captured constructor calls.
//!
//! [`CallCapture`] is the only producer of the rendered grammar:
//!
//! ```text
//! representation := typeName "(" argList ")"
//! argList        := "" | arg ("," " " arg)*
//! arg            := value | name " = " value
//! ```
//!
//! Wrapped constructors feed it each parameter in signature order —
//! positional first, then `#[named]` ones — before the constructor body
//! runs, so the capture sees the raw arguments.

use crate::repr::Repr;

/// An in-progress capture of one constructor call.
pub struct CallCapture {
    buf: String,
    args: usize,
}

impl CallCapture {
    /// Open a capture for the concrete constructed type.
    pub fn new(type_name: &str) -> Self {
        let mut buf = String::with_capacity(type_name.len() + 16);
        buf.push_str(type_name);
        buf.push('(');
        Self { buf, args: 0 }
    }

    fn separate(&mut self) {
        if self.args > 0 {
            self.buf.push_str(", ");
        }
        self.args += 1;
    }

    /// Append a positional argument.
    pub fn positional<T: Repr + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.separate();
        value.repr(&mut self.buf);
        self
    }

    /// Append a named argument as `name = value`.
    pub fn named<T: Repr + ?Sized>(&mut self, name: &str, value: &T) -> &mut Self {
        self.separate();
        self.buf.push_str(name);
        self.buf.push_str(" = ");
        value.repr(&mut self.buf);
        self
    }

    /// Close the call expression and yield the rendered string.
    pub fn finish(mut self) -> String {
        self.buf.push(')');
        self.buf
    }
}
