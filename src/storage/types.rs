//! Record Store Types
//!
//! Documents, identifiers and the query language (filters and projections)
//! understood by every `RecordStore` implementation.

use super::error::StoreError;
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};

/// Reserved field holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// A schemaless record as held by the store.
pub type Document = Map<String, Value>;

/// Opaque identifier assigned by the store on insertion.
///
/// Wrapper around a UUID v4 string. Callers that receive an identifier from
/// outside (e.g. a URL path) go through `RecordId::parse`, so malformed input
/// never reaches a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Parses an externally supplied identifier. Returns `None` when it is not a valid UUID.
    pub fn parse(raw: &str) -> Option<Self> {
        uuid::Uuid::parse_str(raw.trim())
            .ok()
            .map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A predicate applied to a single document field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMatch {
    /// The field value equals the given JSON value.
    Equals(Value),
    /// The field is a string and the regex matches somewhere inside it.
    Pattern {
        pattern: String,
        case_insensitive: bool,
    },
}

impl FieldMatch {
    /// Case-insensitive, unanchored regex predicate.
    pub fn pattern_ci(pattern: impl Into<String>) -> Self {
        FieldMatch::Pattern {
            pattern: pattern.into(),
            case_insensitive: true,
        }
    }
}

/// Conjunction of field predicates. The empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, FieldMatch)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: &RecordId) -> Self {
        Self::new().with(ID_FIELD, FieldMatch::Equals(Value::String(id.0.clone())))
    }

    pub fn with(mut self, field: &str, predicate: FieldMatch) -> Self {
        self.clauses.push((field.to_string(), predicate));
        self
    }

    pub fn clauses(&self) -> &[(String, FieldMatch)] {
        &self.clauses
    }

    /// The identifier this filter pins, when it carries an `_id` equality clause.
    pub fn id_lookup(&self) -> Option<&str> {
        self.clauses.iter().find_map(|(field, predicate)| match predicate {
            FieldMatch::Equals(Value::String(id)) if field == ID_FIELD => Some(id.as_str()),
            _ => None,
        })
    }

    /// Compiles every pattern clause. Fails with `MalformedQuery` on an invalid regex.
    pub fn compile(&self) -> Result<CompiledFilter, StoreError> {
        let clauses = self
            .clauses
            .iter()
            .map(|(field, predicate)| -> Result<(String, Matcher), StoreError> {
                let matcher = match predicate {
                    FieldMatch::Equals(value) => Matcher::Equals(value.clone()),
                    FieldMatch::Pattern {
                        pattern,
                        case_insensitive,
                    } => {
                        let regex = RegexBuilder::new(pattern)
                            .case_insensitive(*case_insensitive)
                            .build()
                            .map_err(|e| {
                                StoreError::MalformedQuery(format!("field '{}': {}", field, e))
                            })?;
                        Matcher::Regex(regex)
                    }
                };
                Ok((field.clone(), matcher))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledFilter { clauses })
    }
}

#[derive(Debug)]
enum Matcher {
    Equals(Value),
    Regex(Regex),
}

/// A filter whose patterns have been compiled, ready to test documents.
#[derive(Debug)]
pub struct CompiledFilter {
    clauses: Vec<(String, Matcher)>,
}

impl CompiledFilter {
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, matcher)| match (matcher, document.get(field)) {
                (Matcher::Equals(expected), Some(actual)) => actual == expected,
                (Matcher::Regex(regex), Some(Value::String(text))) => regex.is_match(text),
                _ => false,
            })
    }
}

/// Field selection applied to every returned document.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Projection {
    /// Every field, `_id` included.
    #[default]
    All,
    /// Only the listed fields.
    Include(Vec<String>),
    /// Every field except the listed ones.
    Exclude(Vec<String>),
}

impl Projection {
    pub fn include(fields: &[&str]) -> Self {
        Projection::Include(fields.iter().map(|f| f.to_string()).collect())
    }

    pub fn without_id() -> Self {
        Projection::Exclude(vec![ID_FIELD.to_string()])
    }

    pub fn apply(&self, document: &Document) -> Document {
        match self {
            Projection::All => document.clone(),
            Projection::Include(fields) => fields
                .iter()
                .filter_map(|field| {
                    document
                        .get(field)
                        .map(|value| (field.clone(), value.clone()))
                })
                .collect(),
            Projection::Exclude(fields) => document
                .iter()
                .filter(|(field, _)| !fields.contains(*field))
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect(),
        }
    }
}
