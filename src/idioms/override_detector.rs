//! Decides whether a method genuinely overrides the universal `equals`
//!
//! Pure functions over [`MethodDescriptor`]; nothing here can fail. A
//! descriptor whose declaring type is unknown is simply not an override.

use crate::domain::{MethodDescriptor, TypeDescriptor, EQUALS_METHOD_NAME};

/// True iff `method` overrides `equals(object) -> bool`
///
/// Same-named overloads (typed `equals(&T)`), new slots that merely reuse
/// the signature, static and abstract declarations, and the universal
/// declaration itself are all rejected.
pub fn is_equals_override(method: &MethodDescriptor) -> bool {
    equals_override_target(method).is_some()
}

/// The type whose `equals` override `method` is, if it is one
pub fn equals_override_target(method: &MethodDescriptor) -> Option<&TypeDescriptor> {
    let declaring_type = method.declaring_type()?;

    let has_equals_signature = method.name().as_ref() == EQUALS_METHOD_NAME
        && matches!(method.parameter_types(), [parameter] if parameter.is_object())
        && *method.return_type() == TypeDescriptor::of::<bool>();

    let modifiers = method.modifiers();
    let overrides_universal_slot = !modifiers.is_static
        && !modifiers.is_abstract
        && method.base_declaration().is_some_and(TypeDescriptor::is_object);

    (has_equals_signature && overrides_universal_slot && !declaring_type.is_object())
        .then_some(declaring_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MethodDescriptorBuilder;
    use rstest::rstest;
    use std::time::Duration;

    fn equals_on_duration() -> MethodDescriptorBuilder {
        MethodDescriptor::builder(EQUALS_METHOD_NAME).declared_on::<Duration>()
    }

    #[test]
    fn test_equals_override_is_detected() {
        let method = MethodDescriptor::equals_override::<Duration>();

        assert!(is_equals_override(&method));
        assert_eq!(
            equals_override_target(&method),
            Some(&TypeDescriptor::of::<Duration>())
        );
    }

    #[test]
    fn test_universal_declaration_is_not_an_override() {
        assert!(!is_equals_override(&MethodDescriptor::object_equals()));
    }

    #[test]
    fn test_unresolved_declaring_type_is_not_an_override() {
        let method = MethodDescriptor::builder(EQUALS_METHOD_NAME)
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .build();

        assert!(!is_equals_override(&method));
        assert!(equals_override_target(&method).is_none());
    }

    #[rstest]
    #[case::typed_overload(
        equals_on_duration()
            .parameter::<Duration>()
            .returns::<bool>()
            .build()
    )]
    #[case::new_slot(
        equals_on_duration()
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .build()
    )]
    #[case::static_method(
        equals_on_duration()
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .static_method()
            .build()
    )]
    #[case::abstract_method(
        equals_on_duration()
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .abstract_method()
            .build()
    )]
    #[case::wrong_return_type(
        equals_on_duration()
            .parameter_type(TypeDescriptor::object())
            .returns::<i32>()
            .overrides(TypeDescriptor::object())
            .build()
    )]
    #[case::two_parameters(
        equals_on_duration()
            .parameter_type(TypeDescriptor::object())
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .build()
    )]
    #[case::different_name(
        MethodDescriptor::builder("same_as")
            .declared_on::<Duration>()
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::object())
            .build()
    )]
    #[case::overrides_other_base(
        equals_on_duration()
            .parameter_type(TypeDescriptor::object())
            .returns::<bool>()
            .overrides(TypeDescriptor::of::<i16>())
            .build()
    )]
    fn test_lookalikes_are_not_overrides(#[case] method: MethodDescriptor) {
        assert!(!is_equals_override(&method), "{method} should be rejected");
    }
}
