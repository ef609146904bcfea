//! Infrastructure layer for equality idioms
//!
//! Concrete collaborators the core only knows through traits: the default
//! proptest-backed instance source and the tracing subscriber setup.

pub mod fixture;
pub mod logging;

pub use fixture::{AnonymousObject, Fixture};
