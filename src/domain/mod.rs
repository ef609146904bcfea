//! Domain types for equality-contract verification
//!
//! This module describes the things assertions reason about: types and
//! methods, the universal specimen every value can be viewed as, the
//! capability that creates specimens, and the laws being checked.

pub mod law;
pub mod method;
pub mod specimen;
pub mod types;

pub use law::EqualityLaw;
pub use method::{
    MethodDescriptor, MethodDescriptorBuilder, MethodModifiers, TypeDescriptor,
    EQUALS_METHOD_NAME,
};
pub use specimen::{GenerationError, InstanceSource, Specimen};
pub use types::{MemberName, MethodName, TrialCount, TypeName};
