use crate::{MemoryStore, Query, from_document, list_all, to_document_data, unique_id};

use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Note {
    #[serde(rename = "$id")]
    id: String,
    project_id: String,
    body: String,
}

#[test]
fn test_to_document_data_strips_system_fields() {
    let note = Note {
        id: "n1".to_string(),
        project_id: "p1".to_string(),
        body: "hello".to_string(),
    };

    let data = to_document_data(&note).unwrap();

    assert_eq!(data, json!({ "projectId": "p1", "body": "hello" }));
}

#[test]
fn test_from_document_ignores_unknown_system_fields() {
    let document = json!({
        "$id": "n1",
        "$collectionId": "notes",
        "$permissions": [],
        "projectId": "p1",
        "body": "hello"
    });

    let note: Note = from_document(document).unwrap();

    assert_eq!(note.id, "n1");
}

#[test]
fn test_unique_id_fits_appwrite_rules() {
    let id = unique_id();

    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(id, unique_id());
}

#[tokio::test]
async fn test_list_all_pages_past_default_limit() {
    let store = MemoryStore::new();
    for i in 0..230 {
        store
            .seed("notes", json!({ "$id": format!("n{i:03}"), "projectId": "p1", "seq": i }))
            .await;
    }
    store
        .seed("notes", json!({ "$id": "other", "projectId": "p2", "seq": 999 }))
        .await;

    let documents = list_all(
        &store,
        "notes",
        &[Query::equal("projectId", "p1"), Query::order_asc("seq"), Query::limit(5)],
    )
    .await
    .unwrap();

    assert_eq!(documents.len(), 230);
    assert_eq!(documents[0]["$id"], "n000");
    assert_eq!(documents[229]["$id"], "n229");
}
