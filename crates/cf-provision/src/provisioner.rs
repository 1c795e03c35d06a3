use crate::{
    Outcome, ProvisionError, ProvisionReport, ProvisionResult, ResourceKind, bucket_specs,
    collection_specs,
};

use cf_appwrite::{AppwriteClient, AppwriteError, BucketSpec, CollectionSpec};

use std::time::Duration;

use log::{debug, info};

/// Which part of the schema a run touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionTarget {
    All,
    Database,
    Collections,
    Buckets,
}

/// Creates whatever part of the catalog is missing and leaves the rest alone.
///
/// Every step is safe to repeat: a 409 from a create call is counted as
/// [`Outcome::Existing`]. Steps run strictly in sequence.
pub struct Provisioner<'a> {
    client: &'a AppwriteClient,
    database_id: String,
    database_name: String,
    schema_delay: Duration,
    collections: Vec<CollectionSpec>,
    buckets: Vec<BucketSpec>,
}

impl<'a> Provisioner<'a> {
    pub fn new(client: &'a AppwriteClient, database_id: &str, schema_delay: Duration) -> Self {
        Self {
            client,
            database_id: database_id.to_string(),
            database_name: "ClarityFlow".to_string(),
            schema_delay,
            collections: collection_specs(),
            buckets: bucket_specs(),
        }
    }

    /// Replace the catalog, mainly for tests that want a small schema.
    pub fn with_catalog(mut self, collections: Vec<CollectionSpec>, buckets: Vec<BucketSpec>) -> Self {
        self.collections = collections;
        self.buckets = buckets;
        self
    }

    pub async fn run(&self, target: ProvisionTarget) -> ProvisionResult<ProvisionReport> {
        let mut report = ProvisionReport::default();

        match target {
            ProvisionTarget::All => {
                self.ensure_database(&mut report).await?;
                self.ensure_collections(&mut report).await?;
                self.ensure_buckets(&mut report).await?;
            }
            ProvisionTarget::Database => {
                self.ensure_database(&mut report).await?;
            }
            ProvisionTarget::Collections => self.ensure_collections(&mut report).await?,
            ProvisionTarget::Buckets => self.ensure_buckets(&mut report).await?,
        }

        info!("Provisioning finished: {}", report);
        Ok(report)
    }

    /// Look the database up first; only a 404 leads to a create.
    pub async fn ensure_database(&self, report: &mut ProvisionReport) -> ProvisionResult<Outcome> {
        let outcome = match self.client.get_database(&self.database_id).await {
            Ok(_) => {
                info!("Database '{}' already exists", self.database_id);
                Outcome::Existing
            }
            Err(e) if e.is_not_found() => {
                info!("Creating database '{}'", self.database_id);
                let created = self
                    .client
                    .create_database(&self.database_id, &self.database_name)
                    .await;
                created_or_existing(created, ResourceKind::Database, &self.database_id)?
            }
            Err(e) => return Err(e.into()),
        };

        report.record(ResourceKind::Database, outcome);
        Ok(outcome)
    }

    pub async fn ensure_collections(&self, report: &mut ProvisionReport) -> ProvisionResult<()> {
        for spec in &self.collections {
            self.ensure_collection(spec, report).await?;
        }
        Ok(())
    }

    /// Collection, then its attributes, then (after the schema delay) its indexes.
    pub async fn ensure_collection(
        &self,
        spec: &CollectionSpec,
        report: &mut ProvisionReport,
    ) -> ProvisionResult<()> {
        let created = self.client.create_collection(&self.database_id, spec).await;
        let outcome = match created {
            Err(e) if e.is_not_found() => {
                return Err(ProvisionError::missing(format!(
                    "Database '{}' not found while creating collection '{}'; run `cf-admin setup database` first",
                    self.database_id, spec.id
                )));
            }
            other => created_or_existing(other, ResourceKind::Collection, &spec.id)?,
        };
        report.record(ResourceKind::Collection, outcome);

        for attribute in &spec.attributes {
            let result = self
                .client
                .create_attribute(&self.database_id, &spec.id, attribute)
                .await;
            let outcome = self.child_outcome(result, ResourceKind::Attribute, &spec.id, &attribute.key)?;
            report.record(ResourceKind::Attribute, outcome);
        }

        // Appwrite builds attributes in the background; indexes over an
        // attribute that is still processing are rejected
        if !self.schema_delay.is_zero() {
            debug!("Waiting {:?} for attributes on '{}'", self.schema_delay, spec.id);
            tokio::time::sleep(self.schema_delay).await;
        }

        for index in &spec.indexes {
            let result = self
                .client
                .create_index(&self.database_id, &spec.id, index)
                .await;
            let outcome = self.child_outcome(result, ResourceKind::Index, &spec.id, &index.key)?;
            report.record(ResourceKind::Index, outcome);
        }

        Ok(())
    }

    pub async fn ensure_buckets(&self, report: &mut ProvisionReport) -> ProvisionResult<()> {
        for spec in &self.buckets {
            let created = self.client.create_bucket(spec).await;
            let outcome = created_or_existing(created, ResourceKind::Bucket, &spec.id)?;
            report.record(ResourceKind::Bucket, outcome);
        }
        Ok(())
    }

    /// Outcome for an attribute or index; a 404 means the parent collection is gone.
    fn child_outcome<T>(
        &self,
        result: Result<T, AppwriteError>,
        kind: ResourceKind,
        collection_id: &str,
        key: &str,
    ) -> ProvisionResult<Outcome> {
        match result {
            Err(e) if e.is_not_found() => Err(ProvisionError::missing(format!(
                "Collection '{}' not found in database '{}' while adding {} '{}'; run `cf-admin setup collections` first",
                collection_id, self.database_id, kind, key
            ))),
            other => created_or_existing(other, kind, &format!("{collection_id}.{key}")),
        }
    }
}

fn created_or_existing<T>(
    result: Result<T, AppwriteError>,
    kind: ResourceKind,
    name: &str,
) -> ProvisionResult<Outcome> {
    match result {
        Ok(_) => {
            info!("Created {} '{}'", kind, name);
            Ok(Outcome::Created)
        }
        Err(e) if e.is_conflict() => {
            info!("{} '{}' already exists", capitalize(kind.as_str()), name);
            Ok(Outcome::Existing)
        }
        Err(e) => Err(e.into()),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
