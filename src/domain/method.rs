//! Language-neutral descriptions of types and methods
//!
//! Assertions never inspect live code. Callers describe the method they
//! want checked with a [`MethodDescriptor`], which keeps override detection
//! a pure function that can be exercised with synthetic descriptors.

use crate::domain::specimen::Specimen;
use crate::domain::types::{MethodName, TypeName};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name of the universal equality operation
pub const EQUALS_METHOD_NAME: &str = "equals";

/// Identifies a type by its `TypeId`, carrying a readable name for reports
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: TypeName,
    id: TypeId,
}

impl TypeDescriptor {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: TypeName::new(std::any::type_name::<T>().to_string()),
            id: TypeId::of::<T>(),
        }
    }

    /// The universal object type every specimen can be viewed as
    pub fn object() -> Self {
        Self::of::<dyn Specimen>()
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn is_object(&self) -> bool {
        self.id == TypeId::of::<dyn Specimen>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// How a method binds to its receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodModifiers {
    pub is_static: bool,
    pub is_abstract: bool,
}

/// Read-only description of a method on a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    declaring_type: Option<TypeDescriptor>,
    name: MethodName,
    parameter_types: Vec<TypeDescriptor>,
    return_type: TypeDescriptor,
    modifiers: MethodModifiers,
    base_declaration: Option<TypeDescriptor>,
}

impl MethodDescriptor {
    pub fn builder(name: impl Into<String>) -> MethodDescriptorBuilder {
        MethodDescriptorBuilder::new(name)
    }

    /// The universal `equals(object) -> bool` declaration itself
    ///
    /// Describes the method a type inherits when it does not override
    /// equality.
    pub fn object_equals() -> Self {
        Self::builder(EQUALS_METHOD_NAME)
            .declared_on_type(TypeDescriptor::object())
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .build()
    }

    /// An `equals(object) -> bool` override declared on `T`
    pub fn equals_override<T: Specimen>() -> Self {
        Self::builder(EQUALS_METHOD_NAME)
            .declared_on::<T>()
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .build()
    }

    pub fn declaring_type(&self) -> Option<&TypeDescriptor> {
        self.declaring_type.as_ref()
    }

    pub fn name(&self) -> &MethodName {
        &self.name
    }

    pub fn parameter_types(&self) -> &[TypeDescriptor] {
        &self.parameter_types
    }

    pub fn return_type(&self) -> &TypeDescriptor {
        &self.return_type
    }

    pub fn modifiers(&self) -> MethodModifiers {
        self.modifiers
    }

    /// The type that first declared the slot this method overrides
    ///
    /// `None` when the method introduces a new slot.
    pub fn base_declaration(&self) -> Option<&TypeDescriptor> {
        self.base_declaration.as_ref()
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declaring_type {
            Some(ty) => write!(f, "{ty}::{}(", self.name)?,
            None => write!(f, "<unresolved>::{}(", self.name)?,
        }
        for (index, parameter) in self.parameter_types.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

/// Incrementally describes a method
#[derive(Debug, Clone)]
pub struct MethodDescriptorBuilder {
    declaring_type: Option<TypeDescriptor>,
    name: MethodName,
    parameter_types: Vec<TypeDescriptor>,
    return_type: TypeDescriptor,
    modifiers: MethodModifiers,
    base_declaration: Option<TypeDescriptor>,
}

impl MethodDescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            declaring_type: None,
            name: MethodName::new(name.into()),
            parameter_types: Vec::new(),
            return_type: TypeDescriptor::of::<()>(),
            modifiers: MethodModifiers::default(),
            base_declaration: None,
        }
    }

    pub fn declared_on<T: ?Sized + 'static>(self) -> Self {
        self.declared_on_type(TypeDescriptor::of::<T>())
    }

    pub fn declared_on_type(mut self, ty: TypeDescriptor) -> Self {
        self.declaring_type = Some(ty);
        self
    }

    pub fn parameter<T: ?Sized + 'static>(self) -> Self {
        self.parameter_type(TypeDescriptor::of::<T>())
    }

    pub fn parameter_type(mut self, ty: TypeDescriptor) -> Self {
        self.parameter_types.push(ty);
        self
    }

    pub fn returns<T: ?Sized + 'static>(mut self) -> Self {
        self.return_type = TypeDescriptor::of::<T>();
        self
    }

    pub fn static_method(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    pub fn abstract_method(mut self) -> Self {
        self.modifiers.is_abstract = true;
        self
    }

    /// Marks the method as overriding a slot first declared on `base`
    pub fn overrides(mut self, base: TypeDescriptor) -> Self {
        self.base_declaration = Some(base);
        self
    }

    pub fn build(self) -> MethodDescriptor {
        MethodDescriptor {
            declaring_type: self.declaring_type,
            name: self.name,
            parameter_types: self.parameter_types,
            return_type: self.return_type,
            modifiers: self.modifiers,
            base_declaration: self.base_declaration,
        }
    }
}
