//! Theory rows from a named data member, topped up with anonymous values
//!
//! The member supplies the leading arguments of each row. Any trailing
//! theory parameters the member leaves out are filled from an
//! [`InstanceSource`], so a theory can mix hand-picked and generated inputs.

use crate::data::errors::MemberDataError;
use crate::data::members::TestClassMembers;
use crate::data::row::DataRow;
use crate::domain::{InstanceSource, MemberName, MethodDescriptor, Specimen, TypeDescriptor};
use crate::error::{Error, Result};
use crate::infrastructure::Fixture;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Composes a member's rows with auto-generated trailing arguments
pub struct MemberAutoData {
    member_name: MemberName,
    parameters: Vec<Box<dyn Specimen>>,
    auto_data: Arc<dyn InstanceSource>,
}

impl MemberAutoData {
    /// Rows come from the member called `member_name`; fails on a blank name
    pub fn new(member_name: impl Into<String>) -> Result<Self> {
        let member_name = MemberName::try_new(member_name.into())
            .map_err(|_| Error::invalid_input("member_name"))?;

        Ok(Self {
            member_name,
            parameters: Vec::new(),
            auto_data: Arc::new(Fixture::new()),
        })
    }

    /// Arguments passed to the member when it is a method
    pub fn with_parameters<I>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Specimen>>,
    {
        self.parameters = parameters.into_iter().collect();
        self
    }

    pub fn with_parameter<T: Specimen>(mut self, value: T) -> Self {
        self.parameters.push(Box::new(value));
        self
    }

    /// Replace the source used for the trailing arguments
    pub fn with_auto_data(mut self, auto_data: Arc<dyn InstanceSource>) -> Self {
        self.auto_data = auto_data;
        self
    }

    pub fn member_name(&self) -> &MemberName {
        &self.member_name
    }

    pub fn parameters(&self) -> &[Box<dyn Specimen>] {
        &self.parameters
    }

    pub fn auto_data(&self) -> &Arc<dyn InstanceSource> {
        &self.auto_data
    }

    /// Produce one complete argument row per row the member yields
    ///
    /// Every row is checked against `theory` before any value is generated,
    /// so a malformed row fails the whole call and nothing is half-built.
    #[instrument(skip_all, fields(member = %self.member_name, theory = %theory))]
    pub fn rows(
        &self,
        members: &TestClassMembers,
        theory: &MethodDescriptor,
    ) -> Result<Vec<DataRow>> {
        let member = members.member(&self.member_name).ok_or_else(|| {
            MemberDataError::MemberNotFound {
                member: self.member_name.clone(),
                class_name: members.class_name().clone(),
            }
        })?;

        let rows = member.invoke(&self.member_name, &self.parameters)?;
        let declared = theory.parameter_types();

        for (index, row) in rows.iter().enumerate() {
            self.check_row(index, row, declared)?;
        }

        let rows = rows
            .into_iter()
            .map(|row| self.complete_row(row, declared))
            .collect::<Result<Vec<_>>>()?;

        debug!(rows = rows.len(), "Composed member data rows");
        Ok(rows)
    }

    fn check_row(
        &self,
        index: usize,
        row: &DataRow,
        declared: &[TypeDescriptor],
    ) -> std::result::Result<(), MemberDataError> {
        if row.len() > declared.len() {
            return Err(MemberDataError::TooManyValues {
                member: self.member_name.clone(),
                row: index,
                supplied: row.len(),
                declared: declared.len(),
            });
        }

        for (position, (value, expected)) in row.values().iter().zip(declared).enumerate() {
            let actual = value.type_descriptor();
            if !expected.is_object() && actual != *expected {
                return Err(MemberDataError::TypeMismatch {
                    member: self.member_name.clone(),
                    row: index,
                    position,
                    expected: expected.name().clone(),
                    actual: actual.name().clone(),
                });
            }
        }

        Ok(())
    }

    fn complete_row(&self, mut row: DataRow, declared: &[TypeDescriptor]) -> Result<DataRow> {
        for ty in &declared[row.len()..] {
            row.push(self.auto_data.create(ty)?);
        }
        Ok(row)
    }
}

impl fmt::Debug for MemberAutoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberAutoData")
            .field("member_name", &self.member_name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixtureSettings;
    use crate::data_row;

    struct DiscountTests;

    fn generated_text() -> Arc<dyn InstanceSource> {
        let mut fixture = Fixture::empty(&FixtureSettings::default());
        fixture.register_factory(|| String::from("generated"));
        Arc::new(fixture)
    }

    fn nothing_registered() -> Arc<dyn InstanceSource> {
        Arc::new(Fixture::empty(&FixtureSettings::default()))
    }

    fn members() -> TestClassMembers {
        TestClassMembers::new::<DiscountTests>()
            .with_property("Rates", || vec![data_row![5_u32], data_row![10_u32]])
            .with_property("Pairs", || {
                vec![data_row![5_u32, String::from("spring")], data_row![10_u32]]
            })
            .with_property("TooWide", || {
                vec![
                    data_row![5_u32],
                    data_row![1_u32, String::from("a"), String::from("b")],
                ]
            })
            .with_property("WrongType", || vec![data_row![5_u32], data_row![-1_i64]])
            .with_method("Multiples", 2, |parameters| {
                let base = parameters[0].downcast_ref::<u32>().copied().unwrap_or(0);
                let count = parameters[1].downcast_ref::<u32>().copied().unwrap_or(0);
                (1..=count).map(|n| data_row![base * n]).collect()
            })
    }

    fn theory() -> MethodDescriptor {
        MethodDescriptor::builder("applies_discount")
            .declared_on::<DiscountTests>()
            .parameter::<u32>()
            .parameter::<String>()
            .build()
    }

    #[test]
    fn test_blank_member_name_is_rejected() {
        let error = MemberAutoData::new("   ").unwrap_err();
        assert!(error.is_argument_error());
    }

    #[test]
    fn test_default_auto_data_is_a_fixture() {
        let sut = MemberAutoData::new("Rates").unwrap();

        assert_eq!(sut.member_name().as_ref(), "Rates");
        assert!(sut.parameters().is_empty());
        assert!(sut
            .auto_data()
            .create(&TypeDescriptor::of::<String>())
            .is_ok());
    }

    #[test]
    fn test_trailing_parameters_are_generated() {
        let sut = MemberAutoData::new("Rates")
            .unwrap()
            .with_auto_data(generated_text());

        let rows = sut.rows(&members(), &theory()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get::<u32>(0), Some(&5));
        assert_eq!(rows[0].get::<String>(1).map(String::as_str), Some("generated"));
        assert_eq!(rows[1].get::<u32>(0), Some(&10));
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_supplied_values_are_kept_and_only_gaps_filled() {
        let sut = MemberAutoData::new("Pairs")
            .unwrap()
            .with_auto_data(generated_text());

        let rows = sut.rows(&members(), &theory()).unwrap();

        assert_eq!(rows[0].get::<String>(1).map(String::as_str), Some("spring"));
        assert_eq!(rows[1].get::<String>(1).map(String::as_str), Some("generated"));
    }

    #[test]
    fn test_method_member_receives_parameters() {
        let sut = MemberAutoData::new("Multiples")
            .unwrap()
            .with_parameter(3_u32)
            .with_parameter(4_u32)
            .with_auto_data(generated_text());

        let rows = sut.rows(&members(), &theory()).unwrap();

        let bases: Vec<u32> = rows
            .iter()
            .filter_map(|row| row.get::<u32>(0).copied())
            .collect();
        assert_eq!(bases, vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_method_member_with_wrong_parameter_count() {
        let sut = MemberAutoData::new("Multiples")
            .unwrap()
            .with_parameter(3_u32);

        let error = sut.rows(&members(), &theory()).unwrap_err();

        assert!(matches!(
            error,
            Error::MemberData(MemberDataError::ParameterCountMismatch {
                expected: 2,
                supplied: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_member_names_the_test_class() {
        let sut = MemberAutoData::new("Absent").unwrap();

        let error = sut.rows(&members(), &theory()).unwrap_err();

        assert!(matches!(
            error,
            Error::MemberData(MemberDataError::MemberNotFound { .. })
        ));
        assert!(error.to_string().contains("DiscountTests"));
    }

    #[test]
    fn test_too_wide_row_fails_before_any_generation() {
        let sut = MemberAutoData::new("TooWide")
            .unwrap()
            .with_auto_data(nothing_registered());

        let error = sut.rows(&members(), &theory()).unwrap_err();

        assert!(matches!(
            error,
            Error::MemberData(MemberDataError::TooManyValues {
                row: 1,
                supplied: 3,
                declared: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_mistyped_value_fails_before_any_generation() {
        let sut = MemberAutoData::new("WrongType")
            .unwrap()
            .with_auto_data(nothing_registered());

        let error = sut.rows(&members(), &theory()).unwrap_err();

        assert!(matches!(
            error,
            Error::MemberData(MemberDataError::TypeMismatch {
                row: 1,
                position: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_object_parameter_accepts_any_value() {
        let theory = MethodDescriptor::builder("accepts_anything")
            .parameter_type(TypeDescriptor::object())
            .build();
        let sut = MemberAutoData::new("WrongType").unwrap();

        let rows = sut.rows(&members(), &theory).unwrap();

        assert_eq!(rows[1].get::<i64>(0), Some(&-1));
    }

    #[test]
    fn test_trailing_object_parameter_gets_a_plain_object() {
        let theory = MethodDescriptor::builder("accepts_rate_and_anything")
            .parameter::<u32>()
            .parameter_type(TypeDescriptor::object())
            .build();
        let sut = MemberAutoData::new("Rates").unwrap();

        let rows = sut.rows(&members(), &theory).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert!(!rows[0].values()[1].equals(&*rows[1].values()[1]));
    }

    #[test]
    fn test_generation_failure_propagates() {
        let sut = MemberAutoData::new("Rates")
            .unwrap()
            .with_auto_data(nothing_registered());

        let error = sut.rows(&members(), &theory()).unwrap_err();

        assert!(matches!(error, Error::Generation(_)));
    }
}
