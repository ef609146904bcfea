//! Errors raised while composing theory rows from a data member

use crate::domain::{MemberName, TypeName};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberDataError {
    #[error("Could not find public static member (property, field, or method) named '{member}' on '{class_name}'")]
    MemberNotFound {
        member: MemberName,
        class_name: TypeName,
    },

    #[error("Member '{member}' takes {expected} parameter(s) but {supplied} were supplied")]
    ParameterCountMismatch {
        member: MemberName,
        expected: usize,
        supplied: usize,
    },

    #[error("Row {row} from member '{member}' supplies {supplied} value(s) but the theory declares only {declared} parameter(s)")]
    TooManyValues {
        member: MemberName,
        row: usize,
        supplied: usize,
        declared: usize,
    },

    #[error("Row {row} from member '{member}' supplies a '{actual}' at position {position} where the theory expects '{expected}'")]
    TypeMismatch {
        member: MemberName,
        row: usize,
        position: usize,
        expected: TypeName,
        actual: TypeName,
    },
}
