// Recipe service client tests against a mock HTTP server.

use recipe_collector_core::backend::{BackendError, HttpRecipeBackend, RecipeBackend};
use recipe_collector_core::recipe::{IngredientSection, NewRecipe, RecipeStep};
use serde_json::{Number, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_recipe_returns_payload_verbatim() {
    let server = MockServer::start().await;
    let recipe = json!({
        "id": 1,
        "title": "Banana Bread",
        "ingredientSections": [{ "ingredients": ["3 bananas", "flour"] }],
        "steps": [{ "number": 1, "description": "Mash the bananas" }],
        "unknownField": true
    });
    Mock::given(method("GET"))
        .and(path("/recipes/1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpRecipeBackend::new(server.uri());
    let payload = backend.get_recipe(1).await.expect("recipe");

    assert_eq!(payload, recipe);
}

#[tokio::test]
async fn missing_recipe_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let backend = HttpRecipeBackend::new(server.uri());
    let err = backend.get_recipe(99).await.expect_err("404");

    assert!(matches!(err, BackendError::Status { status: 404, .. }));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "Failed to get recipe 99: 404 Not Found");
}

#[tokio::test]
async fn search_encodes_term_and_passes_single_object_through() {
    let server = MockServer::start().await;
    let single = json!({ "id": 4, "title": "Mac & Cheese", "steps": [] });
    Mock::given(method("GET"))
        .and(path("/recipes/search"))
        .and(query_param("query", "mac & cheese"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpRecipeBackend::new(format!("{}/", server.uri()));
    let payload = backend.search_recipes("mac & cheese").await.expect("search");

    assert!(payload.is_object());
    assert_eq!(payload, single);
}

#[tokio::test]
async fn add_recipe_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .and(body_json(json!({
            "title": "Toast",
            "timesCooked": 0,
            "ingredientSections": [{ "heading": "Base", "ingredients": ["bread"] }],
            "steps": [{ "number": 1, "description": "Toast the bread" }]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 12, "title": "Toast" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let recipe = NewRecipe {
        title: "Toast".into(),
        description: None,
        time: None,
        servings: None,
        url: None,
        notes: None,
        times_cooked: Some(Number::from(0)),
        ingredient_sections: vec![IngredientSection {
            heading: Some("Base".into()),
            ingredients: vec!["bread".into()],
        }],
        steps: vec![RecipeStep {
            number: Number::from(1),
            description: "Toast the bread".into(),
        }],
    };

    let backend = HttpRecipeBackend::new(server.uri());
    let created = backend.add_recipe(&recipe).await.expect("created");
    assert_eq!(created["id"], 12);
}

#[tokio::test]
async fn server_error_and_bad_json_are_distinguished() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let backend = HttpRecipeBackend::new(server.uri());

    let err = backend.get_recipe(2).await.expect_err("500");
    assert_eq!(err.status_code(), Some(500));

    let err = backend.get_recipe(3).await.expect_err("decode");
    assert!(matches!(err, BackendError::Decode { .. }));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Nothing listens on port 9 locally.
    let backend = HttpRecipeBackend::new("http://127.0.0.1:9");
    let err = backend.search_recipes("soup").await.expect_err("unreachable");
    assert!(matches!(err, BackendError::Network { .. }));
}
