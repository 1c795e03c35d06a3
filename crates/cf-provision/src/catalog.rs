//! The ClarityFlow schema: every collection and bucket the application
//! expects to find in Appwrite.
//!
//! Enum attribute elements are taken from the `cf-core` enums so the stored
//! strings and the parsed types cannot drift apart.

use cf_appwrite::permission::{self, role};
use cf_appwrite::{AttributeSpec, BucketSpec, CollectionSpec, Compression, IndexSpec, SortOrder};
use cf_core::collections::{
    CUSTOM_FIELDS, PROJECT_FILES_BUCKET, ROADMAP_ITEMS, SPRINTS, TASK_ATTACHMENTS_BUCKET,
    TASK_DEPENDENCIES, TASKS,
};
use cf_core::{CustomFieldType, DependencyType, SprintStatus};

const ID_SIZE: u32 = 36;
const MB: u64 = 1024 * 1024;

/// All collections, in provisioning order.
pub fn collection_specs() -> Vec<CollectionSpec> {
    vec![
        sprints(),
        tasks(),
        task_dependencies(),
        custom_fields(),
        roadmap_items(),
    ]
}

pub fn bucket_specs() -> Vec<BucketSpec> {
    vec![task_attachments(), project_files()]
}

/// Any signed-in user may create; reads and writes go through the owner
/// permissions attached to each document.
fn user_owned(id: &str, name: &str) -> CollectionSpec {
    CollectionSpec {
        id: id.to_string(),
        name: name.to_string(),
        document_security: true,
        permissions: vec![permission::create(&role::users())],
        attributes: Vec::new(),
        indexes: Vec::new(),
    }
}

fn sprints() -> CollectionSpec {
    let statuses: Vec<&str> = SprintStatus::ALL.iter().map(SprintStatus::as_str).collect();

    CollectionSpec {
        attributes: vec![
            AttributeSpec::string("userId", ID_SIZE).required(),
            AttributeSpec::string("projectId", ID_SIZE).required(),
            AttributeSpec::string("name", 255).required(),
            AttributeSpec::string("description", 5000),
            AttributeSpec::datetime("startDate").required(),
            AttributeSpec::datetime("endDate").required(),
            AttributeSpec::string("goals", 500).array(),
            AttributeSpec::enumeration("status", &statuses)
                .default_str(SprintStatus::default().as_str()),
            AttributeSpec::float("velocity").default_number(0.0),
            AttributeSpec::float("completedPoints").default_number(0.0),
            AttributeSpec::float("totalPoints").default_number(0.0),
            AttributeSpec::string("taskIds", ID_SIZE).array(),
        ],
        indexes: vec![
            IndexSpec::key("idx_user", &["userId"]),
            IndexSpec::key("idx_project", &["projectId"]),
            IndexSpec::key("idx_status", &["status"]),
            IndexSpec::key("idx_project_start", &["projectId", "startDate"])
                .ordered(&[SortOrder::Asc, SortOrder::Desc]),
        ],
        ..user_owned(SPRINTS, "Sprints")
    }
}

fn tasks() -> CollectionSpec {
    CollectionSpec {
        attributes: vec![
            AttributeSpec::string("userId", ID_SIZE).required(),
            AttributeSpec::string("projectId", ID_SIZE),
            AttributeSpec::string("epicId", ID_SIZE),
            AttributeSpec::string("title", 500).required(),
            AttributeSpec::string("description", 10000),
            AttributeSpec::boolean("completed").default_bool(false),
            AttributeSpec::float("estimatedTime").range(0.0, 10000.0),
            AttributeSpec::datetime("startDate"),
            AttributeSpec::datetime("dueDate"),
            AttributeSpec::datetime("completedAt"),
        ],
        indexes: vec![
            IndexSpec::key("idx_user", &["userId"]),
            IndexSpec::key("idx_project", &["projectId"]),
            IndexSpec::key("idx_epic", &["epicId"]),
            IndexSpec::key("idx_completed", &["completed"]),
            IndexSpec::fulltext("idx_title_search", &["title"]),
        ],
        ..user_owned(TASKS, "Tasks")
    }
}

fn task_dependencies() -> CollectionSpec {
    let kinds: Vec<&str> = DependencyType::ALL.iter().map(DependencyType::as_str).collect();

    CollectionSpec {
        attributes: vec![
            AttributeSpec::string("userId", ID_SIZE).required(),
            AttributeSpec::string("projectId", ID_SIZE),
            AttributeSpec::string("taskId", ID_SIZE).required(),
            AttributeSpec::string("dependsOnTaskId", ID_SIZE).required(),
            AttributeSpec::enumeration("dependencyType", &kinds)
                .default_str(DependencyType::default().as_str()),
            AttributeSpec::integer("lag").range(-365.0, 365.0).default_number(0.0),
            AttributeSpec::string("notes", 1000),
        ],
        indexes: vec![
            IndexSpec::key("idx_task", &["taskId"]),
            IndexSpec::key("idx_depends_on", &["dependsOnTaskId"]),
            IndexSpec::key("idx_project", &["projectId"]),
            IndexSpec::unique("idx_task_pair", &["taskId", "dependsOnTaskId"]),
        ],
        ..user_owned(TASK_DEPENDENCIES, "Task Dependencies")
    }
}

fn custom_fields() -> CollectionSpec {
    let kinds: Vec<&str> = CustomFieldType::ALL.iter().map(CustomFieldType::as_str).collect();

    CollectionSpec {
        attributes: vec![
            AttributeSpec::string("projectId", ID_SIZE).required(),
            AttributeSpec::string("name", 128).required(),
            AttributeSpec::enumeration("fieldType", &kinds).required(),
            AttributeSpec::string("options", 128).array(),
            AttributeSpec::boolean("required").default_bool(false),
            AttributeSpec::integer("position").range(0.0, 10000.0).default_number(0.0),
        ],
        indexes: vec![
            IndexSpec::key("idx_project_position", &["projectId", "position"]),
            IndexSpec::unique("idx_project_name", &["projectId", "name"]),
        ],
        ..user_owned(CUSTOM_FIELDS, "Custom Fields")
    }
}

fn roadmap_items() -> CollectionSpec {
    CollectionSpec {
        attributes: vec![
            AttributeSpec::string("userId", ID_SIZE).required(),
            AttributeSpec::string("projectId", ID_SIZE).required(),
            AttributeSpec::string("title", 255).required(),
            AttributeSpec::string("epicId", ID_SIZE),
            AttributeSpec::datetime("startDate"),
            AttributeSpec::datetime("endDate"),
        ],
        indexes: vec![
            IndexSpec::key("idx_project", &["projectId"]),
            IndexSpec::key("idx_epic", &["epicId"]),
        ],
        ..user_owned(ROADMAP_ITEMS, "Roadmap Items")
    }
}

fn task_attachments() -> BucketSpec {
    BucketSpec {
        id: TASK_ATTACHMENTS_BUCKET.to_string(),
        name: "Task Attachments".to_string(),
        permissions: vec![permission::create(&role::users())],
        file_security: true,
        maximum_file_size: 10 * MB,
        allowed_file_extensions: [
            "jpg", "jpeg", "png", "gif", "webp", "pdf", "doc", "docx", "xls", "xlsx", "txt",
            "csv", "zip",
        ]
        .iter()
        .map(|e| e.to_string())
        .collect(),
        compression: Compression::Gzip,
        encryption: true,
        antivirus: true,
    }
}

fn project_files() -> BucketSpec {
    BucketSpec {
        id: PROJECT_FILES_BUCKET.to_string(),
        name: "Project Files".to_string(),
        permissions: vec![permission::create(&role::users())],
        file_security: true,
        maximum_file_size: 50 * MB,
        allowed_file_extensions: Vec::new(),
        compression: Compression::Zstd,
        encryption: true,
        antivirus: true,
    }
}
