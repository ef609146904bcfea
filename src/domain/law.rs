//! The equivalence-relation laws an `equals` override must respect

use derive_more::Display;

/// A law of equality checked by an idiomatic assertion
///
/// The `Display` form is the requirement sentence reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EqualityLaw {
    #[display("calling x.equals(y) should return same as y.equals(x).")]
    Symmetric,
    #[display(
        "equals should respect the transitive property of equality: if (a == b && b == c) then (a == c)."
    )]
    Transitive,
}

impl EqualityLaw {
    /// Short name of the law
    pub fn name(&self) -> &'static str {
        match self {
            EqualityLaw::Symmetric => "symmetric",
            EqualityLaw::Transitive => "transitive",
        }
    }
}
