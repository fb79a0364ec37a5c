//! Keyed access to the load-generator document

use crate::error::{LoadGenError, LoadGenResult};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

static EMPTY: Lazy<Map<String, Value>> = Lazy::new(Map::new);

/// The four sub-documents the report reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Run statistics (attempts, success rate, duration, ...)
    Summary,
    /// Named run parameters
    Config,
    /// Per-stage timing distributions
    Latency,
    /// Peak resource counters
    Resources,
}

impl SectionKind {
    /// All section kinds
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Summary,
        SectionKind::Config,
        SectionKind::Latency,
        SectionKind::Resources,
    ];

    /// Top-level key of this section in the JSON document
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Config => "config",
            SectionKind::Latency => "latency",
            SectionKind::Resources => "resources",
        }
    }
}

/// A parsed load-generator result
///
/// The default document has no sections, so every lookup falls back to the
/// assembler's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadGenDocument {
    root: Map<String, Value>,
}

impl LoadGenDocument {
    /// Wrap an already-decoded JSON value
    ///
    /// # Errors
    /// Returns [`LoadGenError::NotAnObject`] unless `value` is a JSON object
    pub fn from_value(value: Value) -> LoadGenResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LoadGenError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Read and decode a document from disk
    ///
    /// # Example
    /// ```no_run
    /// use loadgen::LoadGenDocument;
    ///
    /// let doc = LoadGenDocument::load("loadgen.json").unwrap();
    /// println!("{:?}", doc.summary().get("attempts"));
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> LoadGenResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadGenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: Self = text.parse()?;
        debug!(path = %path.display(), keys = doc.root.len(), "loaded load-generator document");
        Ok(doc)
    }

    /// Look up one of the four sections
    ///
    /// A missing section, or one that is not an object, reads as empty.
    pub fn section(&self, kind: SectionKind) -> Section<'_> {
        let fields = match self.root.get(kind.key()) {
            Some(Value::Object(fields)) => fields,
            _ => &*EMPTY,
        };
        Section { kind, fields }
    }

    /// The `summary` section
    pub fn summary(&self) -> Section<'_> {
        self.section(SectionKind::Summary)
    }

    /// The `config` section
    pub fn config(&self) -> Section<'_> {
        self.section(SectionKind::Config)
    }

    /// The `latency` section
    pub fn latency(&self) -> Section<'_> {
        self.section(SectionKind::Latency)
    }

    /// The `resources` section
    pub fn resources(&self) -> Section<'_> {
        self.section(SectionKind::Resources)
    }
}

impl FromStr for LoadGenDocument {
    type Err = LoadGenError;

    fn from_str(s: &str) -> LoadGenResult<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }
}

/// Borrowed view of one JSON object inside the document
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    kind: SectionKind,
    fields: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    /// Which section this is
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Field value, if present
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// Whether `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Nested object under `key`; missing or non-object values read as empty
    pub fn child(&self, key: &str) -> Section<'a> {
        let fields = match self.fields.get(key) {
            Some(Value::Object(fields)) => fields,
            _ => &*EMPTY,
        };
        Section {
            kind: self.kind,
            fields,
        }
    }

    /// Whether the section has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
