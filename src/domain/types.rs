//! Newtypes for the names and counts that flow through the assertions
//!
//! These keep raw strings and integers out of public signatures and
//! validate at the boundary where user input enters the crate.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Fully qualified name of a type, as reported by `std::any::type_name`
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct TypeName(String);

/// Name of a method on a type
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct MethodName(String);

/// Name of a data member (property, field or method) on a test class
///
/// Limited to 256 characters, which comfortably fits any identifier a test
/// author would write.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct MemberName(String);

/// Number of independent samples an assertion draws in one `verify` call
///
/// A single trial reproduces the classic one-sample check; larger values
/// make the sampled law harder to slip past.
#[nutype(
    validate(greater = 0),
    default = 1,
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display,
        Default
    )
)]
pub struct TrialCount(u32);
