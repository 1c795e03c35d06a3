use crate::loader::load_all;
use crate::{ServiceError, ServiceResult};

use cf_appwrite::{DocumentStore, Query, from_document, permission, to_document_data, unique_id};
use cf_core::collections::CUSTOM_FIELDS;
use cf_core::{CustomField, NewCustomField};

use log::info;

pub struct CustomFieldService<S> {
    store: S,
}

impl<S: DocumentStore> CustomFieldService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends the field after the project's existing ones.
    pub async fn create_field(&self, owner_id: &str, new: NewCustomField) -> ServiceResult<CustomField> {
        new.validate()?;

        let position = self.list_fields(&new.project_id).await?.len() as i64;
        let field = CustomField::from_new(unique_id(), position, new);

        let document = self
            .store
            .create_document(
                CUSTOM_FIELDS,
                &field.id,
                to_document_data(&field)?,
                &permission::owner(owner_id),
            )
            .await?;

        info!(
            "Created {} field '{}' at position {} in project {}",
            field.field_type.as_str(),
            field.name,
            field.position,
            field.project_id
        );
        Ok(from_document(document)?)
    }

    pub async fn list_fields(&self, project_id: &str) -> ServiceResult<Vec<CustomField>> {
        let queries = [
            Query::equal("projectId", project_id),
            Query::order_asc("position"),
        ];
        load_all(&self.store, CUSTOM_FIELDS, &queries).await
    }

    pub async fn delete_field(&self, id: &str) -> ServiceResult<()> {
        match self.store.delete_document(CUSTOM_FIELDS, id).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Err(ServiceError::not_found("Custom field", id)),
            Err(e) => Err(e.into()),
        }
    }
}
