// Executor tests: validated calls against a mock recipe service.

use recipe_collector_core::backend::HttpRecipeBackend;
use recipe_collector_core::tooling::{FailureKind, ToolExecutor, ToolRegistry};
use recipe_collector_core::types::ToolCallRequest;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn executor(server: &MockServer) -> ToolExecutor {
    let registry = Arc::new(ToolRegistry::recipe_tools().expect("registry"));
    ToolExecutor::new(registry, Arc::new(HttpRecipeBackend::new(server.uri())))
}

#[tokio::test]
async fn fetch_by_id_succeeds_then_fails_for_missing_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Banana Bread",
            "ingredientSections": [],
            "steps": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let executor = executor(&server);

    let found = executor
        .invoke(&ToolCallRequest::new("c1", "getRecipeById", json!({ "id": 1 })))
        .await;
    assert!(found.is_success());
    assert_eq!(found.summary(), "recipe #1 Banana Bread");

    let missing = executor
        .invoke(&ToolCallRequest::new("c2", "getRecipeById", json!({ "id": 99 })))
        .await;
    let failure = missing.failure_detail().expect("failure");
    assert_eq!(failure.kind, FailureKind::Backend);
    assert_eq!(failure.status_code, Some(404));
    assert_eq!(failure.message, "Failed to get recipe 99: 404 Not Found");
}

#[tokio::test]
async fn invalid_add_recipe_never_reaches_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = executor(&server)
        .invoke(&ToolCallRequest::new(
            "c1",
            "addRecipe",
            json!({ "title": "No steps", "ingredientSections": [] }),
        ))
        .await;

    let failure = result.failure_detail().expect("failure");
    assert_eq!(failure.kind, FailureKind::Validation);
    assert_eq!(failure.violations[0].field, "steps");
}

#[tokio::test]
async fn add_recipe_returns_created_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "title": "Pesto",
            "ingredientSections": [{ "ingredients": ["basil"] }],
            "steps": [{ "number": 1, "description": "Blend" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = executor(&server)
        .invoke(&ToolCallRequest::new(
            "c1",
            "addRecipe",
            json!({
                "title": "Pesto",
                "ingredientSections": [{ "ingredients": ["basil"] }],
                "steps": [{ "number": 1, "description": "Blend" }]
            }),
        ))
        .await;

    assert_eq!(result.payload().map(|p| p["id"].clone()), Some(json!(3)));
    assert_eq!(result.summary(), "recipe #3 Pesto");
}

#[tokio::test]
async fn search_listing_summary_counts_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "Chicken Curry" },
            { "id": 2, "title": "Chicken Soup" },
            { "id": 3, "title": "Roast Chicken" }
        ])))
        .mount(&server)
        .await;

    let result = executor(&server)
        .invoke(&ToolCallRequest::new("c1", "searchRecipes", json!({ "term": "chicken" })))
        .await;

    assert_eq!(
        result.summary(),
        "found 3 recipes: Chicken Curry, Chicken Soup, Roast Chicken"
    );
}
