//! Argument rows for data theories
//!
//! Rows are pulled from a named member of the test class and completed with
//! anonymous values for whatever trailing parameters the member leaves out.

pub mod errors;
pub mod member_auto_data;
pub mod members;
pub mod row;

pub use errors::MemberDataError;
pub use member_auto_data::MemberAutoData;
pub use members::{DataMember, MemberKind, TestClassMembers};
pub use row::DataRow;
