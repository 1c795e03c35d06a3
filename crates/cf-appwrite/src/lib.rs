//! cf-appwrite
//!
//! REST client for the Appwrite database and storage APIs, the
//! [`DocumentStore`] seam the service layer is written against, and an
//! in-process [`MemoryStore`] that behaves like Appwrite for tests.

pub mod client;
pub mod document;
pub mod error;
pub mod memory_store;
pub mod permission;
pub mod query;
pub mod remote_store;
pub mod resources;
pub mod schema;

#[cfg(test)]
mod tests;

pub use client::AppwriteClient;
pub use document::{DocumentList, DocumentStore, from_document, list_all, to_document_data, unique_id};
pub use error::{AppwriteError, Result as AppwriteResult};
pub use memory_store::MemoryStore;
pub use query::Query;
pub use remote_store::RemoteStore;
pub use resources::{BucketInfo, CollectionInfo, DatabaseInfo};
pub use schema::{
    AttributeKind, AttributeSpec, BucketSpec, CollectionSpec, Compression, IndexKind, IndexSpec,
    SortOrder,
};
