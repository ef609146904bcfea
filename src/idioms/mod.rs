//! Idiomatic assertions over equality overrides
//!
//! Each assertion takes one method descriptor at a time, skips methods that
//! are not `equals` overrides, and otherwise exercises the declaring type's
//! equality on anonymous instances drawn from an [`InstanceSource`].
//!
//! [`InstanceSource`]: crate::domain::InstanceSource

pub mod assertion;
pub mod equals_symmetric;
pub mod equals_transitive;
pub mod override_detector;
mod test_utils;

pub use assertion::IdiomaticAssertion;
pub use equals_symmetric::EqualsSymmetricAssertion;
pub use equals_transitive::EqualsTransitiveAssertion;
pub use override_detector::{equals_override_target, is_equals_override};
