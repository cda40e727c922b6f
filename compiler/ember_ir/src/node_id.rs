//! Expression node identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of one syntactic expression node.
///
/// Assigned by the host when it builds the expression tree. Two evaluator
/// nodes built from the same syntactic expression share an id, but each
/// keeps its own adaptive state.
#[derive(Copy, Clone, Eq, PartialEq)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for nodes the host never numbered.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Hash for NodeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#?")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}
