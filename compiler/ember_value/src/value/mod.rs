//! Runtime values seen by the `+` operator.
//!
//! # Domain
//!
//! - `Integer`: 64-bit, checked arithmetic only (`ScalarInt`)
//! - `BigNumber`: arbitrary precision (`num-bigint`)
//! - `Text`: UTF-8 string
//! - `Other`: everything else, opaque to the operator
//!
//! Heap payloads go through `Heap<T>`, whose constructor is private to this
//! module, so the factory methods below are the only way to build them.
//!
//! # Rendering
//!
//! `Display` is the language's canonical text rendering: numbers in base 10,
//! text unquoted. It is what string concatenation uses. Diagnostics use
//! [`Value::diagnostic`] instead, which adds the meta name and quotes text.

mod big_number;
mod heap;
mod opaque;
mod scalar_int;

use std::fmt;

use num_bigint::BigInt;

pub use big_number::BigNumber;
pub use heap::Heap;
pub use opaque::Opaque;
pub use scalar_int::ScalarInt;

/// Meta name shared by both number representations.
pub const NUMBER_META: &str = "Number";

/// Meta name of text values.
pub const STRING_META: &str = "String";

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Small integer (fits in `i64`).
    Integer(ScalarInt),
    /// Arbitrary-precision integer.
    BigNumber(Heap<BigNumber>),
    /// String value.
    Text(Heap<String>),
    /// Value outside the operator's domain.
    Other(Opaque),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value from a raw `i64`.
    #[inline]
    pub fn integer(n: i64) -> Self {
        Value::Integer(ScalarInt::new(n))
    }

    /// Create an arbitrary-precision value.
    ///
    /// The result stays a `BigNumber` even when it would fit in `i64`.
    #[inline]
    pub fn big_number(n: impl Into<BigNumber>) -> Self {
        Value::BigNumber(Heap::new(n.into()))
    }

    /// Create a string value.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Heap::new(s.into()))
    }

    /// Create a boolean value.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Other(Opaque::Boolean(b))
    }

    /// Create the null value.
    #[inline]
    pub fn null() -> Self {
        Value::Other(Opaque::Null)
    }

    /// Create a function reference rendered by `name`.
    #[inline]
    pub fn function(name: impl Into<String>) -> Self {
        Value::Other(Opaque::Function(Heap::new(name.into())))
    }

    /// Create a host object with its own type name and rendering.
    #[inline]
    pub fn object(type_name: impl Into<String>, rendering: impl Into<String>) -> Self {
        Value::Other(Opaque::Object {
            type_name: Heap::new(type_name.into()),
            rendering: Heap::new(rendering.into()),
        })
    }
}

// Value Methods

impl Value {
    /// Try to get a small integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(n.raw()),
            _ => None,
        }
    }

    /// Try to get an arbitrary-precision number.
    pub fn as_big_number(&self) -> Option<&BigNumber> {
        match self {
            Value::BigNumber(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get the string contents.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value of either number representation.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Value::Integer(n) => Some(BigInt::from(n.raw())),
            Value::BigNumber(n) => Some(n.as_bigint().clone()),
            Value::Text(_) | Value::Other(_) => None,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// `Integer` or `BigNumber`.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::BigNumber(_))
    }

    /// Strict variant-and-content equality.
    ///
    /// Unlike `==`, `Integer(3)` and `BigNumber(3)` are different here.
    pub fn is_same_representation(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::BigNumber(a), Value::BigNumber(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a == b,
            _ => false,
        }
    }

    /// Variant name for logs and debugging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::BigNumber(_) => "BigNumber",
            Value::Text(_) => "Text",
            Value::Other(_) => "Other",
        }
    }

    /// Name of the value's type as shown to users.
    pub fn meta_name(&self) -> Option<&str> {
        match self {
            Value::Integer(_) | Value::BigNumber(_) => Some(NUMBER_META),
            Value::Text(_) => Some(STRING_META),
            Value::Other(o) => o.meta_name(),
        }
    }

    /// Display wrapper for diagnostics: `Number 3`, `String "a"`, `NULL`.
    pub fn diagnostic(&self) -> DiagnosticDisplay<'_> {
        DiagnosticDisplay { value: self }
    }
}

/// Formats a value the way error messages show operands.
///
/// Created by [`Value::diagnostic`].
pub struct DiagnosticDisplay<'a> {
    value: &'a Value,
}

impl fmt::Display for DiagnosticDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(meta) = self.value.meta_name() else {
            return write!(f, "{}", self.value);
        };
        match self.value {
            Value::Text(s) => write!(f, "{meta} \"{}\"", &**s),
            other => write!(f, "{meta} {other}"),
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::BigNumber(n) => write!(f, "BigNumber({})", &**n),
            Value::Text(s) => write!(f, "Text({:?})", &**s),
            Value::Other(o) => write!(f, "Other({o:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::BigNumber(n) => write!(f, "{}", &**n),
            Value::Text(s) => f.write_str(s),
            Value::Other(o) => write!(f, "{o}"),
        }
    }
}

/// Numbers compare by value across representations, so a result that came
/// back as `BigNumber(3)` because of a node's commitment equals `Integer(3)`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::BigNumber(a), Value::BigNumber(b)) => a == b,
            (Value::Integer(a), Value::BigNumber(b)) | (Value::BigNumber(b), Value::Integer(a)) => {
                b.equals_i64(a.raw())
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::integer(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::big_number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}
