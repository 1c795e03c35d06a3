use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Database,
    Collection,
    Attribute,
    Index,
    Bucket,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Database => "database",
            ResourceKind::Collection => "collection",
            ResourceKind::Attribute => "attribute",
            ResourceKind::Index => "index",
            ResourceKind::Bucket => "bucket",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one ensure step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    /// The remote service answered 409, or the lookup found it
    Existing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub created: usize,
    pub existing: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub tallies: BTreeMap<ResourceKind, Tally>,
}

impl ProvisionReport {
    pub fn record(&mut self, kind: ResourceKind, outcome: Outcome) {
        let tally = self.tallies.entry(kind).or_default();
        match outcome {
            Outcome::Created => tally.created += 1,
            Outcome::Existing => tally.existing += 1,
        }
    }

    pub fn tally(&self, kind: ResourceKind) -> Tally {
        self.tallies.get(&kind).copied().unwrap_or_default()
    }

    pub fn total_created(&self) -> usize {
        self.tallies.values().map(|t| t.created).sum()
    }

    pub fn total_existing(&self) -> usize {
        self.tallies.values().map(|t| t.existing).sum()
    }
}

impl fmt::Display for ProvisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tallies.is_empty() {
            return f.write_str("nothing provisioned");
        }
        let parts: Vec<String> = self
            .tallies
            .iter()
            .map(|(kind, t)| format!("{kind}: {} created, {} existing", t.created, t.existing))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
