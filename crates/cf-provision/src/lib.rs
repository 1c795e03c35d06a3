pub mod catalog;
pub mod error;
pub mod provisioner;
pub mod report;


pub use catalog::{bucket_specs, collection_specs};
pub use error::{ProvisionError, Result as ProvisionResult};
pub use provisioner::{ProvisionTarget, Provisioner};
pub use report::{Outcome, ProvisionReport, ResourceKind, Tally};
