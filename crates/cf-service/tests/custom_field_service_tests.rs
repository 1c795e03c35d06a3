mod common;

use common::{PROJECT, USER};

use cf_appwrite::MemoryStore;
use cf_core::{CustomFieldType, NewCustomField};
use cf_service::CustomFieldService;

use googletest::prelude::*;

fn new_field(name: &str, field_type: CustomFieldType, options: &[&str]) -> NewCustomField {
    NewCustomField {
        project_id: PROJECT.to_string(),
        name: name.to_string(),
        field_type,
        options: options.iter().map(|o| o.to_string()).collect(),
        required: false,
    }
}

#[tokio::test]
async fn given_fields_created_in_order_when_listing_then_ordered_by_position() {
    // Given
    let service = CustomFieldService::new(MemoryStore::new());
    service
        .create_field(USER, new_field("Severity", CustomFieldType::Select, &["Low", "High"]))
        .await
        .unwrap();
    service
        .create_field(USER, new_field("Due", CustomFieldType::Date, &[]))
        .await
        .unwrap();
    service
        .create_field(USER, new_field("Notes", CustomFieldType::Text, &[]))
        .await
        .unwrap();

    // When
    let fields = service.list_fields(PROJECT).await.unwrap();

    // Then
    let summary: Vec<(&str, i64)> = fields.iter().map(|f| (f.name.as_str(), f.position)).collect();
    assert_eq!(summary, vec![("Severity", 0), ("Due", 1), ("Notes", 2)]);
}

#[tokio::test]
async fn given_select_without_options_when_creating_then_rejected() {
    let service = CustomFieldService::new(MemoryStore::new());

    let err = service
        .create_field(USER, new_field("Priority", CustomFieldType::Select, &["  "]))
        .await
        .unwrap_err();

    assert_that!(err.field(), some(eq("options")));
    assert_that!(service.list_fields(PROJECT).await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_blank_name_when_creating_then_rejected() {
    let service = CustomFieldService::new(MemoryStore::new());

    let err = service
        .create_field(USER, new_field(" ", CustomFieldType::Text, &[]))
        .await
        .unwrap_err();

    assert_that!(err.field(), some(eq("name")));
}

#[tokio::test]
async fn given_non_select_with_options_when_creating_then_options_dropped() {
    let service = CustomFieldService::new(MemoryStore::new());

    let field = service
        .create_field(USER, new_field("Done?", CustomFieldType::Checkbox, &["yes"]))
        .await
        .unwrap();

    assert_that!(field.options, is_empty());
}

#[tokio::test]
async fn given_field_when_deleting_then_removed_and_repeat_is_not_found() {
    // Given
    let service = CustomFieldService::new(MemoryStore::new());
    let field = service
        .create_field(USER, new_field("Estimate", CustomFieldType::Number, &[]))
        .await
        .unwrap();

    // When
    service.delete_field(&field.id).await.unwrap();

    // Then
    assert_that!(service.list_fields(PROJECT).await.unwrap(), is_empty());
    assert!(service.delete_field(&field.id).await.unwrap_err().is_not_found());
}
