use crate::{CoreError, CustomFieldType, DependencyType, SprintStatus};

use std::str::FromStr;

#[test]
fn test_sprint_status_as_str() {
    assert_eq!(SprintStatus::Planning.as_str(), "planning");
    assert_eq!(SprintStatus::Active.as_str(), "active");
    assert_eq!(SprintStatus::Completed.as_str(), "completed");
    assert_eq!(SprintStatus::Cancelled.as_str(), "cancelled");
}

#[test]
fn test_sprint_status_from_str() {
    for status in SprintStatus::ALL {
        assert_eq!(SprintStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(matches!(
        SprintStatus::from_str("planned"),
        Err(CoreError::InvalidSprintStatus { .. })
    ));
}

#[test]
fn test_sprint_status_default_is_planning() {
    assert_eq!(SprintStatus::default(), SprintStatus::Planning);
}

#[test]
fn test_sprint_status_serializes_lowercase() {
    let json = serde_json::to_string(&SprintStatus::Cancelled).unwrap();
    assert_eq!(json, "\"cancelled\"");
}

#[test]
fn test_sprint_status_is_closed() {
    assert!(!SprintStatus::Planning.is_closed());
    assert!(!SprintStatus::Active.is_closed());
    assert!(SprintStatus::Completed.is_closed());
    assert!(SprintStatus::Cancelled.is_closed());
}

#[test]
fn test_dependency_type_from_str() {
    for dependency_type in DependencyType::ALL {
        assert_eq!(
            DependencyType::from_str(dependency_type.as_str()).unwrap(),
            dependency_type
        );
    }
    assert!(DependencyType::from_str("blocks").is_err());
}

#[test]
fn test_dependency_type_default() {
    assert_eq!(DependencyType::default(), DependencyType::FinishToStart);
}

#[test]
fn test_custom_field_type_from_str() {
    for field_type in CustomFieldType::ALL {
        assert_eq!(
            CustomFieldType::from_str(field_type.as_str()).unwrap(),
            field_type
        );
    }
    assert!(matches!(
        CustomFieldType::from_str("dropdown"),
        Err(CoreError::InvalidCustomFieldType { .. })
    ));
}
