//! Typed reads shared by the services.

use crate::ServiceResult;

use cf_appwrite::{DocumentStore, Query, from_document, list_all};

use serde::de::DeserializeOwned;

/// Appwrite caps the number of values in a single query
pub const MAX_QUERY_VALUES: usize = 100;

/// Every document matching `queries`, deserialized.
pub async fn load_all<T, S>(store: &S, collection_id: &str, queries: &[Query]) -> ServiceResult<Vec<T>>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let documents = list_all(store, collection_id, queries).await?;
    documents
        .into_iter()
        .map(|d| from_document(d).map_err(Into::into))
        .collect()
}

/// Documents whose `attribute` is one of `values`, in chunks of
/// [`MAX_QUERY_VALUES`]. Values with no match are skipped.
pub async fn load_where_in<T, S>(
    store: &S,
    collection_id: &str,
    attribute: &str,
    values: &[String],
) -> ServiceResult<Vec<T>>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let mut loaded = Vec::with_capacity(values.len());
    for chunk in values.chunks(MAX_QUERY_VALUES) {
        let query = Query::equal_any(attribute, chunk.iter().map(String::as_str));
        loaded.extend(load_all(store, collection_id, &[query]).await?);
    }
    Ok(loaded)
}
