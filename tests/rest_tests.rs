//! End-to-end tests for the HTTP surface
//!
//! Every test builds the full router through [`ServerBuilder`] and drives it
//! with `axum_test::TestServer`.

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use catalog::prelude::*;
use serde_json::Value;

// =============================================================================
// Test Setup
// =============================================================================

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Product 10", "Books", 120.0, true),
        Item::new("Product 2", "Toys", 35.0, false),
        Item::new("Product 1", "Books", 80.0, true),
        Item::new("Product 7", "Home", 55.5, true),
        Item::new("Desk Lamp 3", "Home", 42.0, false),
        Item::new("Product 12", "Toys", 35.0, true),
        Item::new("Product 5", "Books", 9.99, true),
    ]
}

fn create_test_server() -> TestServer {
    let catalog = InMemoryCatalog::new(sample_items()).expect("sample items are valid");
    let app = ServerBuilder::new()
        .with_store(catalog)
        .build()
        .expect("Failed to build router");
    TestServer::new(app).expect("Failed to create test server")
}

fn names(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

// =============================================================================
// Health Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "catalog-query");
    }

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let server = create_test_server();

        let response = server.get("/healthz").await;
        response.assert_status_ok();
    }
}

// =============================================================================
// Listing Tests
// =============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_listing_sorts_by_numeric_name() {
        let server = create_test_server();

        let response = server.get("/items").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            names(&body),
            vec![
                "Product 1",
                "Product 2",
                "Desk Lamp 3",
                "Product 5",
                "Product 7",
                "Product 10",
                "Product 12",
            ]
        );
        assert_eq!(body["filteredCount"], 7);
        assert_eq!(body["activeFilters"], 0);
        assert_eq!(body["categories"], serde_json::json!(["Books", "Toys", "Home"]));
        assert_eq!(body["pagination"]["rowsPerPage"], 10);
        assert_eq!(body["pagination"]["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let server = create_test_server();

        let response = server
            .get("/items")
            .add_query_param("category", "Books")
            .add_query_param("min_price", 50)
            .add_query_param("in_stock", true)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(names(&body), vec!["Product 1", "Product 10"]);
        assert_eq!(body["activeFilters"], 3);
        assert_eq!(body["categories"], serde_json::json!(["Books", "Toys", "Home"]));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let server = create_test_server();

        let response = server.get("/items?search=LAMP").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(names(&body), vec!["Desk Lamp 3"]);
        assert_eq!(body["items"][0]["inStock"], false);
    }

    #[tokio::test]
    async fn test_price_desc_keeps_ties_in_input_order() {
        let server = create_test_server();

        let response = server
            .get("/items")
            .add_query_param("max_price", 40)
            .add_query_param("sort", "price:desc")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(names(&body), vec!["Product 2", "Product 12", "Product 5"]);
    }

    #[tokio::test]
    async fn test_pagination_pages() {
        let server = create_test_server();

        let response = server.get("/items?limit=5&page=1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(names(&body), vec!["Product 10", "Product 12"]);
        assert_eq!(body["pagination"]["from"], 6);
        assert_eq!(body["pagination"]["to"], 7);
        assert_eq!(body["pagination"]["hasNext"], false);
        assert_eq!(body["pagination"]["hasPrev"], true);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let server = create_test_server();

        let response = server.get("/items?limit=5&page=9").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert!(names(&body).is_empty());
        assert_eq!(body["filteredCount"], 7);
    }

    #[tokio::test]
    async fn test_blank_price_fields_mean_no_bound() {
        let server = create_test_server();

        let response = server.get("/items?min_price=&max_price=&in_stock=&page=").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["filteredCount"], 7);
        assert_eq!(body["activeFilters"], 0);
    }

    #[tokio::test]
    async fn test_no_match_is_not_an_error() {
        let server = create_test_server();

        let response = server.get("/items?category=Garden").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["filteredCount"], 0);
        assert_eq!(body["pagination"]["totalPages"], 0);
    }
}

// =============================================================================
// Error Tests
// =============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_sort_field() {
        let server = create_test_server();

        let response = server.get("/items?sort=rating").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "UNSUPPORTED_SORT_FIELD");
    }

    #[tokio::test]
    async fn test_unknown_sort_order() {
        let server = create_test_server();

        let response = server.get("/items?sort=price:up").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "UNSUPPORTED_SORT_ORDER");
    }

    #[tokio::test]
    async fn test_unsupported_page_size() {
        let server = create_test_server();

        let response = server.get("/items?limit=7").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_ROWS_PER_PAGE");
        assert_eq!(body["details"]["allowed"], serde_json::json!([5, 10, 25, 50]));
    }

    #[tokio::test]
    async fn test_unparseable_price_is_json_error() {
        let server = create_test_server();

        let response = server.get("/items?min_price=abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_PARAMETER");
        assert_eq!(body["details"]["field"], "min_price");
        assert_eq!(body["details"]["value"], "abc");
    }

    #[tokio::test]
    async fn test_negative_limit_is_json_error() {
        let server = create_test_server();

        let response = server.get("/items?limit=-1").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_PARAMETER");
        assert_eq!(body["details"]["field"], "limit");
    }

    #[tokio::test]
    async fn test_duplicate_parameter_is_json_error() {
        let server = create_test_server();

        let response = server.get("/items?page=0&page=1").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "MALFORMED_QUERY_STRING");
    }

    #[tokio::test]
    async fn test_zero_page_size() {
        let server = create_test_server();

        let response = server.get("/items?limit=0").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// Metadata Tests
// =============================================================================

mod metadata_tests {
    use super::*;

    #[tokio::test]
    async fn test_categories_ignore_filters() {
        let server = create_test_server();

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["categories"], serde_json::json!(["Books", "Toys", "Home"]));
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn test_page_sizes_follow_config() {
        let config = EngineConfig::from_yaml_str(
            "page_size_options: [2, 4]\ndefault_rows_per_page: 4\n",
        )
        .unwrap();
        let app = ServerBuilder::new()
            .with_store(InMemoryCatalog::new(sample_items()).unwrap())
            .with_config(config)
            .build()
            .unwrap();
        let server = TestServer::new(app).unwrap();

        let body: Value = server.get("/page-sizes").await.json();
        assert_eq!(body["options"], serde_json::json!([2, 4]));
        assert_eq!(body["default"], 4);

        let body: Value = server.get("/items").await.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 4);
        assert_eq!(body["pagination"]["totalPages"], 2);
    }
}

// =============================================================================
// Builder Tests
// =============================================================================

mod builder_tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_build_without_store_fails() {
        let err = ServerBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("Item store is required"));
    }

    #[tokio::test]
    async fn test_custom_routes_are_merged() {
        let custom = Router::new().route("/version", get(|| async { "1" }));
        let app = ServerBuilder::new()
            .with_store(InMemoryCatalog::default())
            .with_custom_routes(custom)
            .build()
            .unwrap();
        let server = TestServer::new(app).unwrap();

        server.get("/version").await.assert_text("1");
        server.get("/items").await.assert_status_ok();
    }
}
