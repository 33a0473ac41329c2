//! Ingestion Module Tests
//!
//! Covers sample seeding and JSON file import into the record store.

#[cfg(test)]
mod tests {
    use crate::ingestion::loader::{initialize_sample_data, load_from_file, sample_foods};
    use crate::search::engine::FoodSearchService;
    use crate::storage::memory::MemoryStore;
    use crate::storage::store::RecordStore;
    use crate::storage::types::Projection;
    use std::io::Write;
    use std::sync::Arc;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ============================================================
    // SAMPLE DATA TESTS
    // ============================================================

    #[test]
    fn test_sample_foods_are_valid() {
        let foods = sample_foods();
        assert_eq!(foods.len(), 15);
        for food in &foods {
            assert!(food.validate().is_ok(), "{:?} should be valid", food);
        }
    }

    #[test]
    fn test_initialize_sample_data_into_empty_store() {
        let store = MemoryStore::new();

        assert_eq!(initialize_sample_data(&store), 15);
        assert_eq!(store.count().unwrap(), 15);
    }

    #[test]
    fn test_sample_data_is_stored_as_integers() {
        let store = MemoryStore::new();
        initialize_sample_data(&store);

        let documents = store.find_all(&Projection::All).unwrap();
        assert_eq!(documents.len(), 15);
        for document in &documents {
            assert!(document["calories_per_100g"].is_u64(), "{:?}", document);
        }
    }

    #[test]
    fn test_initialize_sample_data_is_idempotent() {
        let store = MemoryStore::new();
        initialize_sample_data(&store);

        assert_eq!(initialize_sample_data(&store), 0);
        assert_eq!(store.count().unwrap(), 15);
    }

    #[test]
    fn test_initialize_sample_data_on_closed_store() {
        let store = MemoryStore::new();
        store.close();

        assert_eq!(initialize_sample_data(&store), 0);
    }

    #[test]
    fn test_seeded_store_answers_example_searches() {
        let store = Arc::new(MemoryStore::new());
        initialize_sample_data(&*store);
        let service = FoodSearchService::new(store.clone());

        let names: Vec<String> = service
            .search_foods("an", None)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Banana", "Orange"]);

        assert_eq!(
            service.get_all_categories(),
            vec!["dairy", "fruit", "grain", "nuts", "protein", "vegetable"]
        );
    }

    // ============================================================
    // FILE IMPORT TESTS
    // ============================================================

    #[test]
    fn test_load_from_file() {
        let file = write_temp(
            r#"[
                {"name": "Quinoa", "calories_per_100g": 120, "category": "grain"},
                {"name": "Tofu", "calories_per_100g": 76.5}
            ]"#,
        );
        let store = Arc::new(MemoryStore::new());

        let loaded = load_from_file(&*store, file.path()).unwrap();
        assert_eq!(loaded, 2);

        let service = FoodSearchService::new(store.clone());
        let tofu = service.search_foods("tofu", None);
        assert_eq!(tofu.len(), 1);
        assert_eq!(tofu[0].calories_per_100g.as_f64(), Some(76.5));
        assert_eq!(tofu[0].category, "");

        let quinoa = service.search_foods("quinoa", None);
        assert!(quinoa[0].calories_per_100g.is_u64());
    }

    #[test]
    fn test_load_rejects_invalid_records_atomically() {
        let file = write_temp(
            r#"[
                {"name": "Quinoa", "calories_per_100g": 120, "category": "grain"},
                {"name": "", "calories_per_100g": 10}
            ]"#,
        );
        let store = MemoryStore::new();

        let err = load_from_file(&store, file.path()).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_temp("{ not json");
        let store = MemoryStore::new();

        assert!(load_from_file(&store, file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let store = MemoryStore::new();
        let result = load_from_file(&store, std::path::Path::new("/definitely/not/here.json"));

        assert!(result.is_err());
    }
}
