#![deny(clippy::arithmetic_side_effects)]
//! Ember Value - runtime values and errors for the Ember evaluator.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `ScalarInt`, `BigNumber`, `Opaque`, `Heap`)
//! - The evaluation error type (`TypeError`, `EvalResult`)
//!
//! # Value Types
//!
//! Heap payloads are `Arc`-backed through `Heap<T>` and only constructed by
//! `Value::` factory methods. Values are immutable; cloning is a refcount
//! bump, which lets the evaluator pass operands by value.

mod errors;
mod value;

pub use errors::{type_error, EvalResult, TypeError};
pub use value::{
    BigNumber, DiagnosticDisplay, Heap, Opaque, ScalarInt, Value, NUMBER_META, STRING_META,
};
