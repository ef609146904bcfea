//! The seam every idiomatic assertion plugs into

use crate::domain::MethodDescriptor;
use crate::error::{Error, Result};

/// A reusable check applied to one method at a time
///
/// Methods the assertion does not apply to verify successfully, so an
/// assertion can be run across arbitrary method lists without filtering.
pub trait IdiomaticAssertion {
    fn verify(&self, method: &MethodDescriptor) -> Result<()>;

    /// Verify a method that may be missing, e.g. one pulled from a data row
    fn verify_optional(&self, method: Option<&MethodDescriptor>) -> Result<()> {
        let method = method.ok_or_else(|| Error::missing_argument("method"))?;
        self.verify(method)
    }

    /// Verify each method in turn, stopping at the first failure
    fn verify_all<'a, I>(&self, methods: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a MethodDescriptor>,
        Self: Sized,
    {
        methods
            .into_iter()
            .try_for_each(|method| self.verify(method))
    }
}
