//! Evaluation errors.
//!
//! The `+` operator has exactly one failure: operands it can neither add nor
//! concatenate. Overflow is not an error; the evaluator widens instead.
//!
//! Factory functions build the error; the evaluator attaches the node
//! identity with the `with_*` builders before returning it.

use std::fmt;

use ember_ir::{NodeId, SourceLocation};

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, TypeError>;

/// Operands outside the operator's domain.
///
/// Terminal: the evaluator never retries it. The enclosing interpreter
/// usually aborts the current program with this as the diagnostic.
#[derive(Clone, Debug)]
pub struct TypeError {
    /// Short name of the operation, e.g. `+`.
    pub operation: &'static str,
    /// The node that raised the error.
    pub node: NodeId,
    /// Source position of that node, when the host provided one.
    pub location: Option<SourceLocation>,
    /// The offending operand values, left to right.
    pub operands: Vec<Value>,
}

impl TypeError {
    /// Attach the identity of the raising node.
    #[must_use]
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = node;
        self
    }

    /// Attach a source location.
    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// The operand values that triggered the error.
    pub fn operands(&self) -> &[Value] {
        &self.operands
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type error")?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        write!(f, ": operation \"{}\" not defined for", self.operation)?;
        let mut sep = " ";
        for operand in &self.operands {
            write!(f, "{sep}{}", operand.diagnostic())?;
            sep = ", ";
        }
        Ok(())
    }
}

impl std::error::Error for TypeError {}

// Operator Errors

/// Operands not supported by `operation`.
#[cold]
pub fn type_error(operation: &'static str, operands: Vec<Value>) -> TypeError {
    TypeError {
        operation,
        node: NodeId::INVALID,
        location: None,
        operands,
    }
}
