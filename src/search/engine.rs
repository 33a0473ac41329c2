use super::query::{literal_pattern, normalize_query, resolve_limit};
use super::types::{
    FIELD_CALORIES, FIELD_CATEGORY, FIELD_NAME, FoodRecord, SearchOutcome, SearchRequest,
    SearchResult,
};
use crate::storage::store::RecordStore;
use crate::storage::types::{FieldMatch, Filter, ID_FIELD, Projection, RecordId};

use rand::Rng;
use serde_json::Value;
use std::sync::Arc;

/// Read-only query logic over a record store.
///
/// Built once at startup around a shared store handle and passed to request
/// handlers. Holds no mutable state, so concurrent callers need no locking.
/// Every public operation is total: store failures are logged and turned into
/// empty results or `None`.
pub struct FoodSearchService {
    store: Arc<dyn RecordStore>,
}

fn result_projection() -> Projection {
    Projection::include(&[FIELD_NAME, FIELD_CALORIES, FIELD_CATEGORY])
}

impl FoodSearchService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Runs a name search (optionally category-scoped) and reports what happened.
    pub fn search(&self, request: &SearchRequest) -> SearchOutcome {
        let Some(query) = normalize_query(&request.query) else {
            return SearchOutcome::BlankQuery;
        };
        let limit = resolve_limit(request.limit);

        let mut filter =
            Filter::new().with(FIELD_NAME, FieldMatch::pattern_ci(literal_pattern(query)));
        if let Some(category) = &request.category {
            filter = filter.with(
                FIELD_CATEGORY,
                FieldMatch::pattern_ci(literal_pattern(category.trim())),
            );
        }

        match self.store.find(&filter, &result_projection(), Some(limit)) {
            Ok(documents) if documents.is_empty() => SearchOutcome::NoMatches,
            Ok(documents) => SearchOutcome::Matched(
                documents.iter().map(SearchResult::from_document).collect(),
            ),
            Err(e) => {
                tracing::error!(
                    "Error searching foods (query={:?}, category={:?}): {}",
                    query,
                    request.category,
                    e
                );
                SearchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Case-insensitive substring search on `name`. Blank queries return nothing.
    pub fn search_foods(&self, query: &str, limit: Option<i64>) -> Vec<SearchResult> {
        self.search(&SearchRequest::new(query).with_limit(limit))
            .into_results()
    }

    /// Like `search_foods`, additionally requiring `category` to contain the given text.
    pub fn search_foods_by_category(
        &self,
        query: &str,
        category: &str,
        limit: Option<i64>,
    ) -> Vec<SearchResult> {
        self.search(
            &SearchRequest::new(query)
                .with_limit(limit)
                .in_category(category),
        )
        .into_results()
    }

    /// Distinct non-empty categories, sorted ascending.
    pub fn get_all_categories(&self) -> Vec<String> {
        match self.store.distinct(FIELD_CATEGORY) {
            Ok(values) => {
                let mut categories: Vec<String> = values
                    .into_iter()
                    .filter_map(|value| match value {
                        Value::String(category) if !category.trim().is_empty() => Some(category),
                        _ => None,
                    })
                    .collect();
                categories.sort();
                categories.dedup();
                categories
            }
            Err(e) => {
                tracing::error!("Error getting categories: {}", e);
                Vec::new()
            }
        }
    }

    /// Looks a food up by its storage identifier. Malformed identifiers are
    /// treated as not found.
    pub fn get_food_by_id(&self, food_id: &str) -> Option<SearchResult> {
        self.get_food_record_by_id(food_id).map(SearchResult::from)
    }

    /// Same lookup as `get_food_by_id`, keeping the identifier on the record.
    pub fn get_food_record_by_id(&self, food_id: &str) -> Option<FoodRecord> {
        let Some(id) = RecordId::parse(food_id) else {
            tracing::debug!("Malformed food id {:?}", food_id);
            return None;
        };

        let projection =
            Projection::include(&[ID_FIELD, FIELD_NAME, FIELD_CALORIES, FIELD_CATEGORY]);
        match self.store.find_one(&Filter::by_id(&id), &projection) {
            Ok(document) => document.as_ref().map(FoodRecord::from_document),
            Err(e) => {
                tracing::error!("Error getting food by id {}: {}", id, e);
                None
            }
        }
    }

    /// Random sample of up to `limit` foods. No usage tracking exists, so
    /// "popular" is a stand-in for "some foods to show".
    pub fn get_popular_foods(&self, limit: usize) -> Vec<SearchResult> {
        self.get_popular_foods_with(limit, &mut rand::thread_rng())
    }

    /// `get_popular_foods` with a caller-supplied random source.
    ///
    /// When the collection holds no more than `limit` records they are all
    /// returned in store order, unsampled.
    pub fn get_popular_foods_with<R: Rng + ?Sized>(
        &self,
        limit: usize,
        rng: &mut R,
    ) -> Vec<SearchResult> {
        let foods: Vec<SearchResult> = match self.store.find_all(&result_projection()) {
            Ok(documents) => documents.iter().map(SearchResult::from_document).collect(),
            Err(e) => {
                tracing::error!("Error getting popular foods: {}", e);
                return Vec::new();
            }
        };

        if foods.len() <= limit {
            return foods;
        }

        rand::seq::index::sample(rng, foods.len(), limit)
            .into_iter()
            .map(|index| foods[index].clone())
            .collect()
    }

    /// Whether the underlying store currently answers.
    pub fn is_healthy(&self) -> bool {
        match self.store.ping() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Record store health check failed: {}", e);
                false
            }
        }
    }
}
