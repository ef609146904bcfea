//! Equality Idioms - reusable checks for `equals` overrides
//!
//! Verifies that a type's override of the universal `equals` operation obeys
//! the symmetric and transitive laws, using anonymous instances supplied by
//! an [`InstanceSource`]. Also composes data-theory rows from a named test
//! class member, generating any trailing arguments the member leaves out.

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod idioms;
pub mod infrastructure;

pub use config::Settings;
pub use data::{DataRow, MemberAutoData, TestClassMembers};
pub use domain::{InstanceSource, MethodDescriptor, Specimen, TypeDescriptor};
pub use error::{EqualsOverrideError, Error, Result};
pub use idioms::{EqualsSymmetricAssertion, EqualsTransitiveAssertion, IdiomaticAssertion};
pub use infrastructure::Fixture;
