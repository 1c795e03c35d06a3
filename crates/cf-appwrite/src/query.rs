use serde_json::{Value, json};

/// Largest page Appwrite returns for a single list call
pub const MAX_LIMIT: u32 = 5000;

/// A list-documents filter or modifier.
///
/// Serializes to Appwrite's JSON query syntax, passed as repeated
/// `queries[]` parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Matches when the attribute equals any of `values`. On array
    /// attributes, matches when any element does.
    Equal { attribute: String, values: Vec<Value> },
    OrderAsc(String),
    OrderDesc(String),
    Limit(u32),
    Offset(u32),
}

impl Query {
    pub fn equal<V: Into<Value>>(attribute: &str, value: V) -> Self {
        Query::Equal {
            attribute: attribute.to_string(),
            values: vec![value.into()],
        }
    }

    pub fn equal_any<V: Into<Value>>(attribute: &str, values: impl IntoIterator<Item = V>) -> Self {
        Query::Equal {
            attribute: attribute.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn order_asc(attribute: &str) -> Self {
        Query::OrderAsc(attribute.to_string())
    }

    pub fn order_desc(attribute: &str) -> Self {
        Query::OrderDesc(attribute.to_string())
    }

    pub fn limit(limit: u32) -> Self {
        Query::Limit(limit.min(MAX_LIMIT))
    }

    pub fn offset(offset: u32) -> Self {
        Query::Offset(offset)
    }

    pub fn to_json(&self) -> Value {
        match self {
            Query::Equal { attribute, values } => {
                json!({ "method": "equal", "attribute": attribute, "values": values })
            }
            Query::OrderAsc(attribute) => json!({ "method": "orderAsc", "attribute": attribute }),
            Query::OrderDesc(attribute) => {
                json!({ "method": "orderDesc", "attribute": attribute })
            }
            Query::Limit(limit) => json!({ "method": "limit", "values": [limit] }),
            Query::Offset(offset) => json!({ "method": "offset", "values": [offset] }),
        }
    }

    pub fn is_pagination(&self) -> bool {
        matches!(self, Query::Limit(_) | Query::Offset(_))
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
