//! Declarative descriptions of collections, attributes, indexes and buckets,
//! and the request bodies Appwrite expects for each.

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    String { size: u32, default: Option<String> },
    Integer { min: Option<i64>, max: Option<i64>, default: Option<i64> },
    Float { min: Option<f64>, max: Option<f64>, default: Option<f64> },
    Boolean { default: Option<bool> },
    Datetime { default: Option<String> },
    Enum { elements: Vec<String>, default: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    pub key: String,
    pub kind: AttributeKind,
    pub required: bool,
    pub array: bool,
}

impl AttributeSpec {
    fn new(key: &str, kind: AttributeKind) -> Self {
        Self {
            key: key.to_string(),
            kind,
            required: false,
            array: false,
        }
    }

    pub fn string(key: &str, size: u32) -> Self {
        Self::new(key, AttributeKind::String { size, default: None })
    }

    pub fn integer(key: &str) -> Self {
        Self::new(
            key,
            AttributeKind::Integer {
                min: None,
                max: None,
                default: None,
            },
        )
    }

    pub fn float(key: &str) -> Self {
        Self::new(
            key,
            AttributeKind::Float {
                min: None,
                max: None,
                default: None,
            },
        )
    }

    pub fn boolean(key: &str) -> Self {
        Self::new(key, AttributeKind::Boolean { default: None })
    }

    pub fn datetime(key: &str) -> Self {
        Self::new(key, AttributeKind::Datetime { default: None })
    }

    pub fn enumeration(key: &str, elements: &[&str]) -> Self {
        Self::new(
            key,
            AttributeKind::Enum {
                elements: elements.iter().map(|e| e.to_string()).collect(),
                default: None,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Default for string and enum attributes; ignored for other kinds.
    pub fn default_str(mut self, value: &str) -> Self {
        match self.kind {
            AttributeKind::String { ref mut default, .. }
            | AttributeKind::Enum { ref mut default, .. }
            | AttributeKind::Datetime { ref mut default } => *default = Some(value.to_string()),
            _ => {}
        }
        self
    }

    /// Default for numeric attributes; ignored for other kinds.
    pub fn default_number(mut self, value: f64) -> Self {
        match self.kind {
            AttributeKind::Integer { ref mut default, .. } => *default = Some(value as i64),
            AttributeKind::Float { ref mut default, .. } => *default = Some(value),
            _ => {}
        }
        self
    }

    pub fn default_bool(mut self, value: bool) -> Self {
        if let AttributeKind::Boolean { ref mut default } = self.kind {
            *default = Some(value);
        }
        self
    }

    /// Bounds for numeric attributes; ignored for other kinds.
    pub fn range(mut self, lower: f64, upper: f64) -> Self {
        match self.kind {
            AttributeKind::Integer {
                ref mut min,
                ref mut max,
                ..
            } => {
                *min = Some(lower as i64);
                *max = Some(upper as i64);
            }
            AttributeKind::Float {
                ref mut min,
                ref mut max,
                ..
            } => {
                *min = Some(lower);
                *max = Some(upper);
            }
            _ => {}
        }
        self
    }

    pub fn has_default(&self) -> bool {
        match &self.kind {
            AttributeKind::String { default, .. }
            | AttributeKind::Datetime { default }
            | AttributeKind::Enum { default, .. } => default.is_some(),
            AttributeKind::Integer { default, .. } => default.is_some(),
            AttributeKind::Float { default, .. } => default.is_some(),
            AttributeKind::Boolean { default } => default.is_some(),
        }
    }

    /// Path segment under `/attributes/`
    pub fn path_segment(&self) -> &'static str {
        match self.kind {
            AttributeKind::String { .. } => "string",
            AttributeKind::Integer { .. } => "integer",
            AttributeKind::Float { .. } => "float",
            AttributeKind::Boolean { .. } => "boolean",
            AttributeKind::Datetime { .. } => "datetime",
            AttributeKind::Enum { .. } => "enum",
        }
    }

    pub fn request_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("key".into(), json!(self.key));
        body.insert("required".into(), json!(self.required));
        body.insert("array".into(), json!(self.array));

        match &self.kind {
            AttributeKind::String { size, default } => {
                body.insert("size".into(), json!(size));
                body.insert("default".into(), json!(default));
            }
            AttributeKind::Integer { min, max, default } => {
                insert_some(&mut body, "min", min.map(Value::from));
                insert_some(&mut body, "max", max.map(Value::from));
                body.insert("default".into(), json!(default));
            }
            AttributeKind::Float { min, max, default } => {
                insert_some(&mut body, "min", min.map(Value::from));
                insert_some(&mut body, "max", max.map(Value::from));
                body.insert("default".into(), json!(default));
            }
            AttributeKind::Boolean { default } => {
                body.insert("default".into(), json!(default));
            }
            AttributeKind::Datetime { default } => {
                body.insert("default".into(), json!(default));
            }
            AttributeKind::Enum { elements, default } => {
                body.insert("elements".into(), json!(elements));
                body.insert("default".into(), json!(default));
            }
        }

        Value::Object(body)
    }
}

fn insert_some(body: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        body.insert(key.to_string(), value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Key,
    Unique,
    Fulltext,
}

impl IndexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Key => "key",
            IndexKind::Unique => "unique",
            IndexKind::Fulltext => "fulltext",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub key: String,
    pub kind: IndexKind,
    pub attributes: Vec<String>,
    pub orders: Vec<SortOrder>,
}

impl IndexSpec {
    fn new(key: &str, kind: IndexKind, attributes: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            kind,
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            orders: Vec::new(),
        }
    }

    pub fn key(key: &str, attributes: &[&str]) -> Self {
        Self::new(key, IndexKind::Key, attributes)
    }

    pub fn unique(key: &str, attributes: &[&str]) -> Self {
        Self::new(key, IndexKind::Unique, attributes)
    }

    pub fn fulltext(key: &str, attributes: &[&str]) -> Self {
        Self::new(key, IndexKind::Fulltext, attributes)
    }

    /// One order per attribute, in the same position.
    pub fn ordered(mut self, orders: &[SortOrder]) -> Self {
        self.orders = orders.to_vec();
        self
    }

    pub fn request_body(&self) -> Value {
        let mut body = json!({
            "key": self.key,
            "type": self.kind.as_str(),
            "attributes": self.attributes,
        });
        if !self.orders.is_empty() {
            body["orders"] = json!(self.orders.iter().map(SortOrder::as_str).collect::<Vec<_>>());
        }
        body
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSpec {
    pub id: String,
    pub name: String,
    /// Enables per-document permissions on top of the collection ones
    pub document_security: bool,
    pub permissions: Vec<String>,
    pub attributes: Vec<AttributeSpec>,
    pub indexes: Vec<IndexSpec>,
}

impl CollectionSpec {
    pub fn request_body(&self) -> Value {
        json!({
            "collectionId": self.id,
            "name": self.name,
            "permissions": self.permissions,
            "documentSecurity": self.document_security,
            "enabled": true,
        })
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.key == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zstd,
}

impl Compression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Zstd => "zstd",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec {
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
    pub file_security: bool,
    /// Bytes
    pub maximum_file_size: u64,
    /// Empty means any extension
    pub allowed_file_extensions: Vec<String>,
    pub compression: Compression,
    pub encryption: bool,
    pub antivirus: bool,
}

impl BucketSpec {
    pub fn request_body(&self) -> Value {
        json!({
            "bucketId": self.id,
            "name": self.name,
            "permissions": self.permissions,
            "fileSecurity": self.file_security,
            "enabled": true,
            "maximumFileSize": self.maximum_file_size,
            "allowedFileExtensions": self.allowed_file_extensions,
            "compression": self.compression.as_str(),
            "encryption": self.encryption,
            "antivirus": self.antivirus,
        })
    }
}
