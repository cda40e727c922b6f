//! Human-readable source positions.

use std::fmt;
use std::sync::Arc;

/// Where a node's expression starts in its source.
///
/// Lines and columns are 1-based, as shown to users. The source name is
/// shared between every node of one source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    source_name: Arc<str>,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// Create a location.
    pub fn new(source_name: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        SourceLocation {
            source_name: source_name.into(),
            line,
            column,
        }
    }

    /// Name of the source (usually a file name).
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line {} col {}",
            self.source_name, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests;
