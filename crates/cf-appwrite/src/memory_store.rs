use crate::{AppwriteError, AppwriteResult, DocumentList, DocumentStore, Query};

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use tokio::sync::RwLock;

/// Appwrite's page size when a list call carries no limit
pub const DEFAULT_LIMIT: usize = 25;

const MEMORY_DATABASE_ID: &str = "memory";

/// In-process [`DocumentStore`] that mirrors Appwrite's observable behaviour:
/// system fields on create, partial updates, 404/409 errors, `equal`
/// filtering, ordering and limit/offset paging. Collections spring into
/// existence on first write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document verbatim, bypassing system-field handling.
    pub async fn seed(&self, collection_id: &str, document: Value) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection_id.to_string())
            .or_default()
            .push(document);
    }

    pub async fn count(&self, collection_id: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection_id).map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
        permissions: &[String],
    ) -> AppwriteResult<Value> {
        let Value::Object(fields) = data else {
            return Err(AppwriteError::api(
                400,
                "document_invalid_structure",
                "Document data must be an object",
            ));
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection_id.to_string()).or_default();

        if documents.iter().any(|d| document_id_of(d) == Some(document_id)) {
            return Err(AppwriteError::api(
                409,
                "document_already_exists",
                "Document with the requested ID already exists.",
            ));
        }

        let now = timestamp();
        let mut document = json!({
            "$id": document_id,
            "$collectionId": collection_id,
            "$databaseId": MEMORY_DATABASE_ID,
            "$createdAt": now,
            "$updatedAt": now,
            "$permissions": permissions,
        });
        if let Value::Object(ref mut map) = document {
            map.extend(fields.into_iter().filter(|(k, _)| !k.starts_with('$')));
        }

        documents.push(document.clone());
        Ok(document)
    }

    async fn get_document(&self, collection_id: &str, document_id: &str) -> AppwriteResult<Value> {
        let collections = self.collections.read().await;
        collections
            .get(collection_id)
            .and_then(|docs| docs.iter().find(|d| document_id_of(d) == Some(document_id)))
            .cloned()
            .ok_or_else(document_not_found)
    }

    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> AppwriteResult<DocumentList> {
        let collections = self.collections.read().await;
        let mut matching: Vec<&Value> = collections
            .get(collection_id)
            .map(|docs| {
                docs.iter()
                    .filter(|d| queries.iter().all(|q| matches(d, q)))
                    .collect()
            })
            .unwrap_or_default();

        let orders: Vec<(&str, bool)> = queries
            .iter()
            .filter_map(|q| match q {
                Query::OrderAsc(attr) => Some((attr.as_str(), false)),
                Query::OrderDesc(attr) => Some((attr.as_str(), true)),
                _ => None,
            })
            .collect();
        if !orders.is_empty() {
            matching.sort_by(|a, b| {
                orders
                    .iter()
                    .map(|(attr, desc)| {
                        let ordering = compare_values(
                            a.get(*attr).unwrap_or(&Value::Null),
                            b.get(*attr).unwrap_or(&Value::Null),
                        );
                        if *desc { ordering.reverse() } else { ordering }
                    })
                    .find(|o| *o != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let mut limit = DEFAULT_LIMIT;
        let mut offset = 0;
        for query in queries {
            match query {
                Query::Limit(n) => limit = *n as usize,
                Query::Offset(n) => offset = *n as usize,
                _ => {}
            }
        }

        let total = matching.len() as u64;
        let documents = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(DocumentList { total, documents })
    }

    async fn update_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> AppwriteResult<Value> {
        let Value::Object(fields) = data else {
            return Err(AppwriteError::api(
                400,
                "document_invalid_structure",
                "Document data must be an object",
            ));
        };

        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection_id)
            .and_then(|docs| {
                docs.iter_mut()
                    .find(|d| document_id_of(d) == Some(document_id))
            })
            .ok_or_else(document_not_found)?;

        if let Value::Object(ref mut map) = *document {
            map.extend(fields.into_iter().filter(|(k, _)| !k.starts_with('$')));
            map.insert("$updatedAt".to_string(), json!(timestamp()));
        }

        Ok(document.clone())
    }

    async fn delete_document(&self, collection_id: &str, document_id: &str) -> AppwriteResult<()> {
        let mut collections = self.collections.write().await;
        let documents = collections
            .get_mut(collection_id)
            .ok_or_else(document_not_found)?;

        let before = documents.len();
        documents.retain(|d| document_id_of(d) != Some(document_id));
        if documents.len() == before {
            return Err(document_not_found());
        }

        Ok(())
    }
}

fn document_id_of(document: &Value) -> Option<&str> {
    document.get("$id").and_then(Value::as_str)
}

#[track_caller]
fn document_not_found() -> AppwriteError {
    AppwriteError::api(
        404,
        "document_not_found",
        "Document with the requested ID could not be found.",
    )
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, false)
}

fn matches(document: &Value, query: &Query) -> bool {
    match query {
        Query::Equal { attribute, values } => match document.get(attribute) {
            Some(Value::Array(elements)) => elements.iter().any(|e| values.contains(e)),
            Some(value) => values.iter().any(|v| loosely_equal(value, v)),
            None => false,
        },
        _ => true,
    }
}

/// Numbers compare by value so that `1` matches `1.0`.
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
