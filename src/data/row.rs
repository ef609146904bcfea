//! One invocation's worth of arguments for a data theory

use crate::domain::Specimen;
use derive_more::From;
use std::any::Any;

/// Ordered argument values for one run of a parameterized test
#[derive(Debug, Default, From)]
pub struct DataRow(Vec<Box<dyn Specimen>>);

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value, builder style
    pub fn with<T: Specimen>(mut self, value: T) -> Self {
        self.0.push(Box::new(value));
        self
    }

    pub fn push(&mut self, value: Box<dyn Specimen>) {
        self.0.push(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[Box<dyn Specimen>] {
        &self.0
    }

    /// The value at `index`, if present and of type `T`
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.0.get(index).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn into_values(self) -> Vec<Box<dyn Specimen>> {
        self.0
    }
}

/// Build a [`DataRow`] from a list of values
#[macro_export]
macro_rules! data_row {
    ($($value:expr),* $(,)?) => {
        $crate::data::DataRow::new()$(.with($value))*
    };
}
