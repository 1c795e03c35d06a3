use crate::{AppwriteClient, AppwriteResult, DocumentList, DocumentStore, Query};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// [`DocumentStore`] backed by one Appwrite database
#[derive(Clone)]
pub struct RemoteStore {
    client: Arc<AppwriteClient>,
    database_id: String,
}

impl RemoteStore {
    pub fn new(client: Arc<AppwriteClient>, database_id: &str) -> Self {
        Self {
            client,
            database_id: database_id.to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for RemoteStore {
    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
        permissions: &[String],
    ) -> AppwriteResult<Value> {
        self.client
            .create_document(
                &self.database_id,
                collection_id,
                document_id,
                &data,
                permissions,
            )
            .await
    }

    async fn get_document(&self, collection_id: &str, document_id: &str) -> AppwriteResult<Value> {
        self.client
            .get_document(&self.database_id, collection_id, document_id)
            .await
    }

    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> AppwriteResult<DocumentList> {
        self.client
            .list_documents(&self.database_id, collection_id, queries)
            .await
    }

    async fn update_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> AppwriteResult<Value> {
        self.client
            .update_document(&self.database_id, collection_id, document_id, &data)
            .await
    }

    async fn delete_document(&self, collection_id: &str, document_id: &str) -> AppwriteResult<()> {
        self.client
            .delete_document(&self.database_id, collection_id, document_id)
            .await
    }
}
