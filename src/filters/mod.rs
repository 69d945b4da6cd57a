//! Image filters applied before character mapping.
//!
//! Each filter is a named pure transformation ([`ops`]); the chain
//! ([`chain`]) tracks which filters are enabled and their parameter
//! values, and applies the enabled subset in a fixed canonical order.

pub mod chain;
pub mod ops;

pub use chain::{FilterChain, FilterKind, ParamSpec};
