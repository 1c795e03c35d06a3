use crate::{
    AppwriteError, AppwriteResult, AttributeSpec, BucketInfo, BucketSpec, CollectionInfo,
    CollectionSpec, DatabaseInfo, DocumentList, IndexSpec, Query,
};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

const RESPONSE_FORMAT: &str = "1.5.0";

/// HTTP client for the Appwrite server API
pub struct AppwriteClient {
    pub endpoint: String,
    pub project_id: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl AppwriteClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - API root including version (e.g., "https://cloud.appwrite.io/v1")
    /// * `project_id` - Sent as X-Appwrite-Project
    /// * `api_key` - Optional server key, sent as X-Appwrite-Key
    pub fn new(endpoint: &str, project_id: &str, api_key: Option<&str>) -> Self {
        Self::with_http_client(endpoint, project_id, api_key, ReqwestClient::new())
    }

    /// Same as [`AppwriteClient::new`] with a per-request timeout.
    pub fn with_timeout(
        endpoint: &str,
        project_id: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> AppwriteResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(endpoint, project_id, api_key, client))
    }

    /// Build from loaded configuration.
    pub fn from_config(
        appwrite: &cf_config::AppwriteConfig,
        provisioning: &cf_config::ProvisioningConfig,
    ) -> AppwriteResult<Self> {
        Self::with_timeout(
            &appwrite.endpoint,
            &appwrite.project_id,
            appwrite.api_key.as_deref(),
            provisioning.request_timeout(),
        )
    }

    fn with_http_client(
        endpoint: &str,
        project_id: &str,
        api_key: Option<&str>,
        client: ReqwestClient,
    ) -> Self {
        Self {
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.map(String::from),
            client,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build a request with the project and key headers
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        let mut req = self
            .client
            .request(method, &url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Response-Format", RESPONSE_FORMAT);

        if let Some(ref key) = self.api_key {
            req = req.header("X-Appwrite-Key", key);
        }

        req
    }

    /// Execute request and map Appwrite error bodies
    async fn execute(&self, req: reqwest::RequestBuilder) -> AppwriteResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(parse_error(status, &text));
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn execute_as<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> AppwriteResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // Database Operations
    // =========================================================================

    /// Get a database by ID
    pub async fn get_database(&self, database_id: &str) -> AppwriteResult<DatabaseInfo> {
        let req = self.request(Method::GET, &format!("/databases/{}", database_id));
        self.execute_as(req).await
    }

    /// Create a database
    pub async fn create_database(&self, database_id: &str, name: &str) -> AppwriteResult<DatabaseInfo> {
        let body = json!({ "databaseId": database_id, "name": name, "enabled": true });
        let req = self.request(Method::POST, "/databases").json(&body);
        self.execute_as(req).await
    }

    // =========================================================================
    // Collection Operations
    // =========================================================================

    /// Get a collection by ID
    pub async fn get_collection(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> AppwriteResult<CollectionInfo> {
        let req = self.request(
            Method::GET,
            &format!("/databases/{}/collections/{}", database_id, collection_id),
        );
        self.execute_as(req).await
    }

    /// Create a collection (attributes and indexes are added separately)
    pub async fn create_collection(
        &self,
        database_id: &str,
        spec: &CollectionSpec,
    ) -> AppwriteResult<CollectionInfo> {
        let req = self
            .request(Method::POST, &format!("/databases/{}/collections", database_id))
            .json(&spec.request_body());
        self.execute_as(req).await
    }

    /// Create an attribute; Appwrite builds it asynchronously
    pub async fn create_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        spec: &AttributeSpec,
    ) -> AppwriteResult<Value> {
        let path = format!(
            "/databases/{}/collections/{}/attributes/{}",
            database_id,
            collection_id,
            spec.path_segment()
        );
        let req = self.request(Method::POST, &path).json(&spec.request_body());
        self.execute(req).await
    }

    /// Create an index over existing attributes
    pub async fn create_index(
        &self,
        database_id: &str,
        collection_id: &str,
        spec: &IndexSpec,
    ) -> AppwriteResult<Value> {
        let path = format!(
            "/databases/{}/collections/{}/indexes",
            database_id, collection_id
        );
        let req = self.request(Method::POST, &path).json(&spec.request_body());
        self.execute(req).await
    }

    // =========================================================================
    // Document Operations
    // =========================================================================

    fn documents_path(database_id: &str, collection_id: &str) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        )
    }

    /// Create a document
    pub async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: &[String],
    ) -> AppwriteResult<Value> {
        let mut body = json!({ "documentId": document_id, "data": data });
        if !permissions.is_empty() {
            body["permissions"] = json!(permissions);
        }
        let req = self
            .request(Method::POST, &Self::documents_path(database_id, collection_id))
            .json(&body);
        self.execute(req).await
    }

    /// Get a document by ID
    pub async fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> AppwriteResult<Value> {
        let path = format!(
            "{}/{}",
            Self::documents_path(database_id, collection_id),
            document_id
        );
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    /// List documents matching queries (one page)
    pub async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> AppwriteResult<DocumentList> {
        let params: Vec<(&str, String)> = queries.iter().map(|q| ("queries[]", q.to_string())).collect();
        debug!("list {} with {} queries", collection_id, params.len());

        let req = self
            .request(Method::GET, &Self::documents_path(database_id, collection_id))
            .query(&params);
        self.execute_as(req).await
    }

    /// Update some fields of a document
    pub async fn update_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
    ) -> AppwriteResult<Value> {
        let path = format!(
            "{}/{}",
            Self::documents_path(database_id, collection_id),
            document_id
        );
        let req = self
            .request(Method::PATCH, &path)
            .json(&json!({ "data": data }));
        self.execute(req).await
    }

    /// Delete a document
    pub async fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> AppwriteResult<()> {
        let path = format!(
            "{}/{}",
            Self::documents_path(database_id, collection_id),
            document_id
        );
        let req = self.request(Method::DELETE, &path);
        self.execute(req).await.map(|_| ())
    }

    // =========================================================================
    // Storage Operations
    // =========================================================================

    /// Get a storage bucket by ID
    pub async fn get_bucket(&self, bucket_id: &str) -> AppwriteResult<BucketInfo> {
        let req = self.request(Method::GET, &format!("/storage/buckets/{}", bucket_id));
        self.execute_as(req).await
    }

    /// Create a storage bucket
    pub async fn create_bucket(&self, spec: &BucketSpec) -> AppwriteResult<BucketInfo> {
        let req = self
            .request(Method::POST, "/storage/buckets")
            .json(&spec.request_body());
        self.execute_as(req).await
    }
}

/// Map an error response; bodies look like `{"message", "code", "type"}`.
fn parse_error(status: StatusCode, text: &str) -> AppwriteError {
    let body: Value = serde_json::from_str(text).unwrap_or(Value::Null);

    let kind = body
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    AppwriteError::api(status.as_u16(), kind, message)
}
