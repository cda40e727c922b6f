//! The `+` operator as a self-specializing node.
//!
//! One `AddNode` is built per syntactic add expression and reused for every
//! evaluation of it. Paths, in priority order:
//!
//! 1. small integers, checked add (overflow excludes this path for good)
//! 2. arbitrary precision, `Integer` operands widened to `BigNumber`
//! 3. string concatenation, if either operand is `Text`
//! 4. type error
//!
//! The node remembers the paths it has needed in a [`SpecializationState`]
//! and tries the committed path first. Every path re-checks its own guard,
//! so the state only decides dispatch order, never the result.

mod profile;
mod state;

use std::borrow::Cow;
use std::sync::atomic::{AtomicU8, Ordering};

use ember_ir::{NodeId, SourceLocation};
use ember_value::{type_error, BigNumber, EvalResult, Value};

use crate::DispatchMode;
use profile::Path;
use state::StateWord;

pub use profile::{DispatchProfile, ProfileSnapshot};
pub use state::SpecializationState;

/// Adaptive `+` node.
///
/// `Send + Sync`: the state is one atomic byte and only ever widens, so
/// several threads may evaluate the same node.
#[derive(Debug)]
pub struct AddNode {
    id: NodeId,
    location: Option<SourceLocation>,
    mode: DispatchMode,
    state: AtomicU8,
    profile: DispatchProfile,
}

impl AddNode {
    /// Short name used in diagnostics.
    pub const SHORT_NAME: &'static str = "+";

    /// Build an adaptive node with no source location.
    pub fn new(id: NodeId) -> Self {
        AddNodeBuilder::new(id).build()
    }

    /// Start building a node.
    pub fn builder(id: NodeId) -> AddNodeBuilder {
        AddNodeBuilder::new(id)
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    #[inline]
    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Current specialization.
    pub fn state(&self) -> SpecializationState {
        self.load().state
    }

    /// Whether the small-integer path overflowed on this node.
    pub fn integer_path_excluded(&self) -> bool {
        self.load().integer_excluded
    }

    /// Counters for this node.
    pub fn profile(&self) -> ProfileSnapshot {
        self.profile.snapshot()
    }

    /// Evaluate `left + right`.
    ///
    /// Returns an `Integer`, `BigNumber` or `Text`, or a `TypeError` naming
    /// both operands and this node. Overflow is handled internally.
    pub fn evaluate(&self, left: Value, right: Value) -> EvalResult {
        let word = self.load();
        match word.state {
            SpecializationState::CommittedInteger => {
                if let (Value::Integer(a), Value::Integer(b)) = (&left, &right) {
                    if let Some(sum) = a.checked_add(*b) {
                        self.profile.record_path(Path::Integer);
                        return Ok(Value::Integer(sum));
                    }
                }
            }
            SpecializationState::CommittedBigNumber => {
                // Small pairs still take the integer path until it overflows.
                if let (Value::Integer(a), Value::Integer(b)) = (&left, &right) {
                    if !word.integer_excluded {
                        if let Some(sum) = a.checked_add(*b) {
                            self.profile.record_path(Path::Integer);
                            return Ok(Value::Integer(sum));
                        }
                        return self.execute_and_specialize(left, right, word);
                    }
                }
                if let Some(sum) = add_big_numbers(&left, &right) {
                    self.profile.record_path(Path::BigNumber);
                    return Ok(sum);
                }
            }
            SpecializationState::CommittedString => {
                if is_string(&left, &right) {
                    self.profile.record_path(Path::String);
                    return Ok(concat(&left, &right));
                }
            }
            SpecializationState::Uncommitted | SpecializationState::Generic => {}
        }
        self.execute_and_specialize(left, right, word)
    }

    /// Check every guard in priority order and widen to the path that
    /// matched. This is the whole of `Generic` dispatch.
    fn execute_and_specialize(&self, left: Value, right: Value, word: StateWord) -> EvalResult {
        self.profile.record_slow_path();

        let mut overflowed = false;
        if let (Value::Integer(a), Value::Integer(b)) = (&left, &right) {
            if !word.integer_excluded {
                match a.checked_add(*b) {
                    Some(sum) => {
                        self.widen(SpecializationState::CommittedInteger, false);
                        self.profile.record_path(Path::Integer);
                        return Ok(Value::Integer(sum));
                    }
                    None => overflowed = true,
                }
            }
        }

        if let Some(sum) = add_big_numbers(&left, &right) {
            self.widen(SpecializationState::CommittedBigNumber, overflowed);
            self.profile.record_path(Path::BigNumber);
            return Ok(sum);
        }

        if is_string(&left, &right) {
            self.widen(SpecializationState::CommittedString, false);
            self.profile.record_path(Path::String);
            return Ok(concat(&left, &right));
        }

        self.profile.record_path(Path::TypeError);
        tracing::trace!(
            node = %self.id,
            left = left.type_name(),
            right = right.type_name(),
            "add operands outside supported domain"
        );
        let err = type_error(Self::SHORT_NAME, vec![left, right]).with_node(self.id);
        Err(match &self.location {
            Some(location) => err.with_location(location.clone()),
            None => err,
        })
    }

    #[inline]
    fn load(&self) -> StateWord {
        StateWord::decode(self.state.load(Ordering::Acquire))
    }

    /// Publish the join of the current word and `matched`.
    ///
    /// The join is recomputed from whatever is stored at update time, so a
    /// concurrent widening by another thread is kept, never overwritten.
    fn widen(&self, matched: SpecializationState, exclude_integer: bool) {
        let update = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                let current = StateWord::decode(bits);
                let next = current.widened(matched, exclude_integer);
                (next != current).then(|| next.encode())
            });
        if let Ok(bits) = update {
            let previous = StateWord::decode(bits);
            let next = previous.widened(matched, exclude_integer);
            self.profile.record_transition();
            tracing::debug!(
                node = %self.id,
                from = ?previous.state,
                to = ?next.state,
                integer_excluded = next.integer_excluded,
                "add node specialized"
            );
        }
    }
}

/// Builder for [`AddNode`].
#[derive(Clone, Debug)]
pub struct AddNodeBuilder {
    id: NodeId,
    location: Option<SourceLocation>,
    mode: DispatchMode,
}

impl AddNodeBuilder {
    /// Create a builder with `Adaptive` mode and no location.
    pub fn new(id: NodeId) -> Self {
        AddNodeBuilder {
            id,
            location: None,
            mode: DispatchMode::default(),
        }
    }

    /// Set the source location reported in type errors.
    #[must_use]
    pub fn location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the dispatch mode.
    #[must_use]
    pub fn mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> AddNode {
        let initial = StateWord::new(self.mode.initial_state());
        AddNode {
            id: self.id,
            location: self.location,
            mode: self.mode,
            state: AtomicU8::new(initial.encode()),
            profile: DispatchProfile::default(),
        }
    }
}

/// Implicit `Integer -> BigNumber` cast.
///
/// The only conversion the operator performs, and only inside the
/// arbitrary-precision path. Nothing ever narrows back.
fn widen_to_big(value: &Value) -> Option<Cow<'_, BigNumber>> {
    match value {
        Value::Integer(n) => Some(Cow::Owned(BigNumber::from(n.raw()))),
        Value::BigNumber(n) => Some(Cow::Borrowed(&**n)),
        Value::Text(_) | Value::Other(_) => None,
    }
}

fn add_big_numbers(left: &Value, right: &Value) -> Option<Value> {
    let a = widen_to_big(left)?;
    let b = widen_to_big(right)?;
    Some(Value::big_number(a.add(&b)))
}

/// String guard: either operand is text, whatever the other one is.
#[inline]
fn is_string(left: &Value, right: &Value) -> bool {
    left.is_text() || right.is_text()
}

fn concat(left: &Value, right: &Value) -> Value {
    Value::text(format!("{left}{right}"))
}

#[cfg(test)]
mod tests;
