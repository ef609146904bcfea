use crate::data::MemberDataError;
use crate::domain::{EqualityLaw, GenerationError, TypeName};
use thiserror::Error;

/// Raised when a type's `equals` override breaks one of the equality laws
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The type '{type_name}' overrides the equals method incorrectly, {law}")]
pub struct EqualsOverrideError {
    pub type_name: TypeName,
    pub law: EqualityLaw,
}

impl EqualsOverrideError {
    pub fn new(type_name: TypeName, law: EqualityLaw) -> Self {
        Self { type_name, law }
    }
}

/// Equality idioms error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Argument error: '{parameter}' must be supplied")]
    MissingArgument { parameter: &'static str },

    #[error("Invalid input: {field}")]
    InvalidInput { field: String },

    #[error(transparent)]
    EqualsOverride(#[from] EqualsOverrideError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    MemberData(#[from] MemberDataError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn missing_argument(parameter: &'static str) -> Self {
        Self::MissingArgument { parameter }
    }

    pub fn invalid_input(field: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
        }
    }

    /// True when the type under test broke an equality law
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::EqualsOverride(_))
    }

    /// True when a required input was absent or malformed
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::MissingArgument { .. } | Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
