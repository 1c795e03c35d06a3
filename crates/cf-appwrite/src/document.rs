use crate::{AppwriteResult, Query};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page size used by [`list_all`]
pub const PAGE_SIZE: u32 = 100;

/// One page of a list-documents call
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DocumentList {
    /// Matching documents across all pages
    pub total: u64,
    pub documents: Vec<Value>,
}

/// Document CRUD within a single database.
///
/// Documents are JSON objects carrying Appwrite's `$`-prefixed system fields
/// (`$id`, `$createdAt`, `$updatedAt`, ...). Errors follow Appwrite's status
/// codes: 404 for a missing document, 409 for a duplicate id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
        permissions: &[String],
    ) -> AppwriteResult<Value>;

    async fn get_document(&self, collection_id: &str, document_id: &str) -> AppwriteResult<Value>;

    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> AppwriteResult<DocumentList>;

    /// Partial update: only the keys present in `data` change.
    async fn update_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> AppwriteResult<Value>;

    async fn delete_document(&self, collection_id: &str, document_id: &str) -> AppwriteResult<()>;
}

/// Fetch every document matching `queries`, paging with limit/offset.
/// Pagination queries already in `queries` are replaced.
pub async fn list_all<S: DocumentStore + ?Sized>(
    store: &S,
    collection_id: &str,
    queries: &[Query],
) -> AppwriteResult<Vec<Value>> {
    let mut base: Vec<Query> = queries.iter().filter(|q| !q.is_pagination()).cloned().collect();
    base.push(Query::limit(PAGE_SIZE));

    let mut documents = Vec::new();
    let mut offset = 0u32;

    loop {
        let mut page_queries = base.clone();
        page_queries.push(Query::offset(offset));

        let page = store.list_documents(collection_id, &page_queries).await?;
        let fetched = page.documents.len() as u32;
        documents.extend(page.documents);

        if fetched < PAGE_SIZE || documents.len() as u64 >= page.total {
            break;
        }
        offset += fetched;
    }

    Ok(documents)
}

/// Serialize a model into document data: system fields are dropped since
/// Appwrite rejects them in create and update payloads.
pub fn to_document_data<T: Serialize>(value: &T) -> AppwriteResult<Value> {
    let mut data = serde_json::to_value(value)?;
    if let Value::Object(ref mut map) = data {
        map.retain(|key, _| !key.starts_with('$'));
    }
    Ok(data)
}

pub fn from_document<T: DeserializeOwned>(document: Value) -> AppwriteResult<T> {
    Ok(serde_json::from_value(document)?)
}

/// A fresh document id: 32 lowercase hex chars, within Appwrite's id rules.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
