#[cfg(test)]
mod tests {
    use catalog_bot::catalog::{format_product_info, CatalogStore};
    use catalog_bot::catalog_errors::CatalogError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_CATALOG: &str = r#"{
        "products": [
            {"name": "Brelock", "size": "M"},
            {"name": "Figurka", "id": 2, "time_to_print": 5}
        ]
    }"#;

    fn sample_store() -> CatalogStore {
        CatalogStore::from_json(SAMPLE_CATALOG).unwrap()
    }

    fn write_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp_config(SAMPLE_CATALOG);
        let store = CatalogStore::load(file.path()).unwrap();

        assert_eq!(store.get_all_products().len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let result = CatalogStore::load("no/such/cfg.json");

        assert!(matches!(result, Err(CatalogError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let file = write_temp_config("{ not json at all");
        let result = CatalogStore::load(file.path());

        assert!(matches!(result, Err(CatalogError::ConfigParse(_))));
    }

    #[test]
    fn test_empty_products_list_is_valid() {
        let store = CatalogStore::from_json(r#"{"products": []}"#).unwrap();

        assert!(store.get_all_products().is_empty());
        assert!(store.get_by_id(0).is_none());
    }

    #[test]
    fn test_missing_products_key_yields_empty_catalog() {
        let store = CatalogStore::from_json(r#"{"shop": "printlab"}"#).unwrap();

        assert!(store.get_all_products().is_empty());
    }

    #[test]
    fn test_get_by_id_returns_product_at_position() {
        let store = sample_store();

        for (i, product) in store.get_all_products().iter().enumerate() {
            assert_eq!(store.get_by_id(i as i64), Some(product));
        }
    }

    #[test]
    fn test_get_by_id_out_of_range_is_a_miss() {
        let store = sample_store();

        assert!(store.get_by_id(2).is_none());
        assert!(store.get_by_id(99).is_none());
        assert!(store.get_by_id(-1).is_none());
    }

    #[test]
    fn test_get_by_name_is_case_insensitive() {
        let store = sample_store();

        let by_exact = store.get_by_name("Figurka").unwrap();
        let by_upper = store.get_by_name("FIGURKA").unwrap();
        let by_lower = store.get_by_name("figurka").unwrap();

        assert_eq!(by_exact, by_upper);
        assert_eq!(by_exact, by_lower);
        assert_eq!(by_exact.get("id"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_get_by_name_miss() {
        let store = sample_store();

        assert!(store.get_by_name("Unknown").is_none());
        assert!(store.get_by_name("").is_none());
    }

    #[test]
    fn test_get_by_name_is_exact_without_trimming() {
        let store = sample_store();

        assert!(store.get_by_name(" Brelock").is_none());
        assert!(store.get_by_name("Brel").is_none());
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let store = CatalogStore::from_json(
            r#"{"products": [
                {"name": "Vase", "size": "S"},
                {"name": "VASE", "size": "XL"}
            ]}"#,
        )
        .unwrap();

        let found = store.get_by_name("vase").unwrap();
        assert_eq!(found.get("size"), Some(&serde_json::json!("S")));
    }

    #[test]
    fn test_product_without_name_field_never_matches() {
        let store = CatalogStore::from_json(
            r#"{"products": [
                {"sku": "A-1"},
                {"name": 42},
                {"name": "Brelock"}
            ]}"#,
        )
        .unwrap();

        let found = store.get_by_name("brelock").unwrap();
        assert_eq!(found.get("name"), Some(&serde_json::json!("Brelock")));
        assert!(store.get_by_name("A-1").is_none());
    }

    #[test]
    fn test_format_all_fields_in_catalog_order() {
        let store = sample_store();
        let product = store.get_by_id(0).unwrap();

        assert_eq!(format_product_info(product, None), "Name: Brelock\nSize: M");
    }

    #[test]
    fn test_format_selected_fields_in_caller_order() {
        let store = sample_store();
        let product = store.get_by_name("figurka").unwrap();

        assert_eq!(
            format_product_info(product, Some(&["id", "time_to_print"])),
            "Id: 2\nTime To Print: 5"
        );
        // Caller order wins over catalog order
        assert_eq!(
            format_product_info(product, Some(&["time_to_print", "name"])),
            "Time To Print: 5\nName: Figurka"
        );
    }

    #[test]
    fn test_format_skips_absent_fields_silently() {
        let store = sample_store();
        let product = store.get_by_id(0).unwrap();

        assert_eq!(
            format_product_info(product, Some(&["size", "weight"])),
            "Size: M"
        );
        assert_eq!(format_product_info(product, Some(&["weight"])), "");
    }

    #[test]
    fn test_format_joins_dimension_arrays() {
        let store = CatalogStore::from_json(
            r#"{"products": [{"name": "Box", "dimensions": [10, 20, 30]}]}"#,
        )
        .unwrap();
        let product = store.get_by_id(0).unwrap();

        assert_eq!(
            format_product_info(product, Some(&["dimensions"])),
            "Dimensions: 10 x 20 x 30"
        );
    }

    #[test]
    fn test_info_by_id_not_found_message_names_the_id() {
        let store = sample_store();

        assert_eq!(
            store.get_product_info_by_id(99, None),
            "Product with ID 99 not found"
        );
        assert_eq!(
            store.get_product_info_by_id(-3, None),
            "Product with ID -3 not found"
        );
    }

    #[test]
    fn test_info_by_name_not_found_message_names_the_query() {
        let store = sample_store();

        assert_eq!(
            store.get_product_info_by_name("Unknown", None),
            "Product with name 'Unknown' not found"
        );
    }

    #[test]
    fn test_lookup_and_format_scenario() {
        let store = sample_store();

        assert_eq!(
            store.get_product_info_by_id(0, None),
            "Name: Brelock\nSize: M"
        );
        assert_eq!(
            store.get_product_info_by_name("figurka", Some(&["id", "time_to_print"])),
            "Id: 2\nTime To Print: 5"
        );
    }
}
