//! Static data members of a test class
//!
//! A test class exposes rows through named properties, fields, or methods
//! taking arguments. Rust has no reflection over statics, so the class
//! registers its members here by name.

use crate::data::errors::MemberDataError;
use crate::data::row::DataRow;
use crate::domain::{MemberName, Specimen, TypeDescriptor, TypeName};
use std::collections::HashMap;
use std::fmt;

type MemberSource = Box<dyn Fn(&[Box<dyn Specimen>]) -> Vec<DataRow> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Property,
    Field,
    Method { arity: usize },
}

/// A named source of theory rows
pub struct DataMember {
    kind: MemberKind,
    source: MemberSource,
}

impl DataMember {
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Produce the member's rows
    ///
    /// Parameters are only meaningful for methods and must then match the
    /// method's arity; other members ignore them.
    pub fn invoke(
        &self,
        name: &MemberName,
        parameters: &[Box<dyn Specimen>],
    ) -> Result<Vec<DataRow>, MemberDataError> {
        match self.kind {
            MemberKind::Method { arity } if arity != parameters.len() => {
                Err(MemberDataError::ParameterCountMismatch {
                    member: name.clone(),
                    expected: arity,
                    supplied: parameters.len(),
                })
            }
            MemberKind::Method { .. } => Ok((self.source)(parameters)),
            MemberKind::Property | MemberKind::Field => Ok((self.source)(&[])),
        }
    }
}

impl fmt::Debug for DataMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataMember")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// The data members a test class makes available to its theories
#[derive(Debug)]
pub struct TestClassMembers {
    class_name: TypeName,
    members: HashMap<String, DataMember>,
}

impl TestClassMembers {
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self {
            class_name: TypeDescriptor::of::<T>().name().clone(),
            members: HashMap::new(),
        }
    }

    pub fn with_property<F>(self, name: impl Into<String>, rows: F) -> Self
    where
        F: Fn() -> Vec<DataRow> + Send + Sync + 'static,
    {
        self.with_member(name, MemberKind::Property, Box::new(move |_| rows()))
    }

    pub fn with_field<F>(self, name: impl Into<String>, rows: F) -> Self
    where
        F: Fn() -> Vec<DataRow> + Send + Sync + 'static,
    {
        self.with_member(name, MemberKind::Field, Box::new(move |_| rows()))
    }

    /// Register a method taking exactly `arity` arguments
    pub fn with_method<F>(self, name: impl Into<String>, arity: usize, rows: F) -> Self
    where
        F: Fn(&[Box<dyn Specimen>]) -> Vec<DataRow> + Send + Sync + 'static,
    {
        self.with_member(name, MemberKind::Method { arity }, Box::new(rows))
    }

    pub fn member(&self, name: &MemberName) -> Option<&DataMember> {
        self.members.get(name.as_ref())
    }

    pub fn class_name(&self) -> &TypeName {
        &self.class_name
    }

    fn with_member(
        mut self,
        name: impl Into<String>,
        kind: MemberKind,
        source: MemberSource,
    ) -> Self {
        let name = name.into().trim().to_string();
        self.members.insert(name, DataMember { kind, source });
        self
    }
}
