//! Adaptive specialization state of an add node.
//!
//! States form a small join-semilattice. A node only ever moves to the join
//! of its current state and the path that just matched, so concurrent
//! writers can race without narrowing each other's commitment:
//!
//! ```text
//!                 Generic
//!                /       \
//!    CommittedBigNumber   CommittedString
//!            |                 |
//!    CommittedInteger          |
//!                \            /
//!                 Uncommitted
//! ```

/// Which path a node currently trusts first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpecializationState {
    /// Nothing evaluated successfully yet.
    Uncommitted = 0,
    /// Both operands have always been small integers that did not overflow.
    CommittedInteger = 1,
    /// Only numbers seen, at least one needed arbitrary precision.
    CommittedBigNumber = 2,
    /// Every successful call involved a string.
    CommittedString = 3,
    /// Both numeric and string calls seen. Re-checks every guard.
    Generic = 4,
}

impl SpecializationState {
    /// Least upper bound of two states.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        use SpecializationState::{
            CommittedBigNumber, CommittedInteger, Generic, Uncommitted,
        };
        match (self, other) {
            (Uncommitted, x) | (x, Uncommitted) => x,
            (a, b) if a == b => a,
            (CommittedInteger, CommittedBigNumber) | (CommittedBigNumber, CommittedInteger) => {
                CommittedBigNumber
            }
            _ => Generic,
        }
    }

    /// Whether every combination `other` handles is already handled here.
    pub fn covers(self, other: Self) -> bool {
        self.join(other) == self
    }

    /// Whether the node has committed to anything.
    pub fn is_committed(self) -> bool {
        !matches!(self, SpecializationState::Uncommitted)
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => SpecializationState::Uncommitted,
            1 => SpecializationState::CommittedInteger,
            2 => SpecializationState::CommittedBigNumber,
            3 => SpecializationState::CommittedString,
            // Unknown encodings decode to the most general state.
            _ => SpecializationState::Generic,
        }
    }
}

const STATE_MASK: u8 = 0x07;
const INTEGER_EXCLUDED: u8 = 0x80;

/// The node's state as stored in one atomic byte.
///
/// Low bits: `SpecializationState`. High bit: the integer fast path
/// overflowed on this node and must not be attempted again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct StateWord {
    pub(crate) state: SpecializationState,
    pub(crate) integer_excluded: bool,
}

impl StateWord {
    pub(crate) const fn new(state: SpecializationState) -> Self {
        StateWord {
            state,
            integer_excluded: false,
        }
    }

    pub(crate) fn encode(self) -> u8 {
        let flag = if self.integer_excluded {
            INTEGER_EXCLUDED
        } else {
            0
        };
        (self.state as u8) | flag
    }

    pub(crate) fn decode(bits: u8) -> Self {
        StateWord {
            state: SpecializationState::from_bits(bits & STATE_MASK),
            integer_excluded: bits & INTEGER_EXCLUDED != 0,
        }
    }

    /// This word after observing `matched`. Never narrows.
    #[must_use]
    pub(crate) fn widened(self, matched: SpecializationState, exclude_integer: bool) -> Self {
        StateWord {
            state: self.state.join(matched),
            integer_excluded: self.integer_excluded || exclude_integer,
        }
    }
}
