//! Values outside the arithmetic/string domain.
//!
//! The `+` operator never looks inside these. They still carry a canonical
//! text rendering, because concatenation with a string renders the other
//! operand whatever it is.

use std::fmt;

use super::Heap;

/// A value the evaluator treats as opaque.
#[derive(Clone, PartialEq, Eq)]
pub enum Opaque {
    /// Boolean value.
    Boolean(bool),
    /// The null value. Has no meta name.
    Null,
    /// Function reference, rendered by name.
    Function(Heap<String>),
    /// Host object with its own type name and rendering.
    Object {
        type_name: Heap<String>,
        rendering: Heap<String>,
    },
}

impl Opaque {
    /// Name of the value's type as shown in diagnostics.
    ///
    /// `None` for `Null`, which diagnostics render bare.
    pub fn meta_name(&self) -> Option<&str> {
        match self {
            Opaque::Boolean(_) => Some("Boolean"),
            Opaque::Null => None,
            Opaque::Function(_) => Some("Function"),
            Opaque::Object { type_name, .. } => Some(type_name),
        }
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opaque::Boolean(b) => write!(f, "Boolean({b})"),
            Opaque::Null => write!(f, "Null"),
            Opaque::Function(name) => write!(f, "Function({})", &**name),
            Opaque::Object {
                type_name,
                rendering,
            } => write!(f, "Object({}: {:?})", &**type_name, &**rendering),
        }
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opaque::Boolean(b) => write!(f, "{b}"),
            Opaque::Null => write!(f, "NULL"),
            Opaque::Function(name) => write!(f, "{}", &**name),
            Opaque::Object { rendering, .. } => write!(f, "{}", &**rendering),
        }
    }
}
