use crate::{CustomField, CustomFieldType, NewCustomField};

use googletest::prelude::*;

fn new_field(field_type: CustomFieldType, options: &[&str]) -> NewCustomField {
    NewCustomField {
        project_id: "project-1".to_string(),
        name: "Severity".to_string(),
        field_type,
        options: options.iter().map(|o| o.to_string()).collect(),
        required: false,
    }
}

#[test]
fn given_select_without_options_when_validated_then_options_error() {
    let input = new_field(CustomFieldType::Select, &[" ", ""]);

    let err = input.validate().unwrap_err();

    assert_that!(err.field(), some(eq("options")));
}

#[test]
fn given_text_field_without_options_when_validated_then_ok() {
    let input = new_field(CustomFieldType::Text, &[]);

    assert_that!(input.validate(), ok(anything()));
}

#[test]
fn given_blank_name_when_validated_then_name_error() {
    let mut input = new_field(CustomFieldType::Number, &[]);
    input.name = String::new();

    assert_that!(input.validate().unwrap_err().field(), some(eq("name")));
}

#[test]
fn given_select_field_when_built_then_blank_options_dropped() {
    let field = CustomField::from_new(
        "field-1".to_string(),
        2,
        new_field(CustomFieldType::Select, &["Low", " ", " High "]),
    );

    assert_that!(field.options, elements_are![eq("Low"), eq("High")]);
    assert_that!(field.position, eq(2));
}

#[test]
fn given_non_select_field_when_built_then_options_cleared() {
    let field = CustomField::from_new(
        "field-1".to_string(),
        0,
        new_field(CustomFieldType::Checkbox, &["ignored"]),
    );

    assert_that!(field.options, is_empty());
}
