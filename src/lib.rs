//! asciipaint library crate.
//!
//! This module exposes the conversion core (renderer, filter chain, and
//! source tracking) for integration testing. The GUI shell lives in the
//! binary and is not part of the library surface.

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod source;
