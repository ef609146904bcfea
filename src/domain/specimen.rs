//! Anonymous instances and the capability that creates them
//!
//! A [`Specimen`] is the universal object every type can be viewed as: it
//! can be compared to any other specimen through `equals`, whatever the
//! concrete types involved. An [`InstanceSource`] hands out specimens of a
//! requested type without the caller having to author fixtures by hand.

use crate::domain::method::TypeDescriptor;
use crate::domain::types::TypeName;
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// The universal object type
///
/// Implemented for every `PartialEq + Debug` type. Comparing specimens of
/// two different concrete types yields `false`, mirroring an `equals`
/// override that only accepts its own type.
pub trait Specimen: Any + fmt::Debug {
    /// The universal equality operation
    fn equals(&self, other: &dyn Specimen) -> bool;

    fn as_any(&self) -> &dyn Any;

    /// Descriptor of the concrete type behind this specimen
    fn type_descriptor(&self) -> TypeDescriptor;
}

impl<T> Specimen for T
where
    T: PartialEq + Any + fmt::Debug,
{
    fn equals(&self, other: &dyn Specimen) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<T>()
    }
}

impl dyn Specimen {
    /// Borrow the specimen as its concrete type, if it is one
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Errors raised while synthesizing an anonymous instance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("No specimen builder is registered for type '{type_name}'")]
    Unregistered { type_name: TypeName },

    #[error("Could not generate an instance of '{type_name}': {reason}")]
    Rejected { type_name: TypeName, reason: String },
}

impl GenerationError {
    pub fn unregistered(ty: &TypeDescriptor) -> Self {
        Self::Unregistered {
            type_name: ty.name().clone(),
        }
    }

    pub fn rejected(ty: &TypeDescriptor, reason: impl Into<String>) -> Self {
        Self::Rejected {
            type_name: ty.name().clone(),
            reason: reason.into(),
        }
    }
}

/// Capability that creates anonymous instances of a requested type
///
/// Each call should be treated as an independent draw; nothing is assumed
/// about determinism or uniqueness of the returned values. Implementations
/// decide for themselves whether they are safe to share across threads.
pub trait InstanceSource {
    fn create(&self, ty: &TypeDescriptor) -> Result<Box<dyn Specimen>, GenerationError>;
}
