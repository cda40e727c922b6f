#![deny(clippy::arithmetic_side_effects)]
//! Ember Eval - self-specializing operator nodes.
//!
//! The host interpreter evaluates an expression's children and hands the
//! two resulting values to the operator node. This crate provides the `+`
//! node, which keeps adaptive dispatch state between evaluations.
//!
//! # Architecture
//!
//! - `AddNode`: the `+` operator, with `evaluate(left, right)`
//! - `SpecializationState`: which path a node trusts first
//! - `DispatchMode`: adaptive vs. always-generic dispatch
//! - `ProfileSnapshot`: per-node path counters
//!
//! # Re-exports
//!
//! Value and error types come from `ember_value`, identity types from
//! `ember_ir`.

mod add_node;
mod dispatch_mode;

use std::sync::Once;

pub use add_node::{
    AddNode, AddNodeBuilder, DispatchProfile, ProfileSnapshot, SpecializationState,
};
pub use dispatch_mode::DispatchMode;
pub use ember_ir::{NodeId, SourceLocation};
pub use ember_value::{type_error, BigNumber, EvalResult, Opaque, ScalarInt, TypeError, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=ember_eval=debug` to see node specialization.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
