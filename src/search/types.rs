use crate::storage::types::{Document, ID_FIELD, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub const FIELD_NAME: &str = "name";
pub const FIELD_CALORIES: &str = "calories_per_100g";
pub const FIELD_CATEGORY: &str = "category";

/// A food item as persisted in the record store.
///
/// `id` is only present when the document it was read from carried the
/// store-assigned `_id`; records read from import files never do.
///
/// Calories are kept as a JSON number so an integer stored as `52` is served
/// back as `52`, not `52.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodRecord {
    #[serde(skip)]
    pub id: Option<RecordId>,
    pub name: String,
    pub calories_per_100g: Number,
    #[serde(default)]
    pub category: Option<String>,
}

impl FoodRecord {
    pub fn new(name: &str, calories_per_100g: impl Into<Number>, category: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            calories_per_100g: calories_per_100g.into(),
            category: Some(category.to_string()),
        }
    }

    /// Maps a raw document into a record. Missing or mistyped fields fall back
    /// to an empty name, zero calories and no category.
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: document
                .get(ID_FIELD)
                .and_then(Value::as_str)
                .map(|id| RecordId(id.to_string())),
            name: document
                .get(FIELD_NAME)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            calories_per_100g: match document.get(FIELD_CALORIES) {
                Some(Value::Number(calories)) => calories.clone(),
                _ => Number::from(0),
            },
            category: document
                .get(FIELD_CATEGORY)
                .and_then(Value::as_str)
                .filter(|category| !category.is_empty())
                .map(str::to_string),
        }
    }

    /// Document shape handed to the store on insertion. The identifier is left
    /// for the store to assign.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.insert(FIELD_NAME.to_string(), Value::from(self.name.clone()));
        document.insert(
            FIELD_CALORIES.to_string(),
            Value::Number(self.calories_per_100g.clone()),
        );
        if let Some(category) = &self.category {
            document.insert(FIELD_CATEGORY.to_string(), Value::from(category.clone()));
        }
        document
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        // JSON numbers are always finite, so only the sign needs checking.
        if self.calories_per_100g.as_f64().is_none_or(|calories| calories < 0.0) {
            return Err(format!(
                "calories_per_100g must be a non-negative number, got {}",
                self.calories_per_100g
            ));
        }
        Ok(())
    }
}

/// Caller-facing projection of a `FoodRecord`. Never carries the storage identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub calories_per_100g: Number,
    pub category: String,
}

impl SearchResult {
    pub fn from_document(document: &Document) -> Self {
        FoodRecord::from_document(document).into()
    }
}

impl From<FoodRecord> for SearchResult {
    fn from(record: FoodRecord) -> Self {
        Self {
            name: record.name,
            calories_per_100g: record.calories_per_100g,
            category: record.category.unwrap_or_default(),
        }
    }
}

/// Parameters of a single name search, optionally scoped to a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: Option<i64>,
    pub category: Option<String>,
}

impl SearchRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// What a search actually did.
///
/// The public contract collapses everything except `Matched` into an empty
/// list; the distinction is kept so handlers can log it.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Matched(Vec<SearchResult>),
    NoMatches,
    /// The query was empty after trimming; the store was not consulted.
    BlankQuery,
    /// The store rejected or failed the query.
    Failed(String),
}

impl SearchOutcome {
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Matched(results) => results,
            SearchOutcome::NoMatches | SearchOutcome::BlankQuery | SearchOutcome::Failed(_) => {
                Vec::new()
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub count: usize,
}

impl SearchResponse {
    pub fn ok(query: String, results: Vec<SearchResult>) -> Self {
        Self {
            success: true,
            error: None,
            query,
            count: results.len(),
            results,
        }
    }

    pub fn failed(query: String, error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            query,
            results: Vec::new(),
            count: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub categories: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PopularResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub results: Vec<SearchResult>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    /// Storage identifier, only sent when the caller asked for it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub food: Option<SearchResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
