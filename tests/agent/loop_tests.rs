// End-to-end agent runs: mocked OpenAI-compatible model and recipe service.

use recipe_collector_core::agent::{Agent, AgentOptions, AgentStatus};
use recipe_collector_core::backend::HttpRecipeBackend;
use recipe_collector_core::config::{ModelInfo, ModelProviderConfig};
use recipe_collector_core::model::DynamicModelProvider;
use recipe_collector_core::model::clients::OpenAIClient;
use recipe_collector_core::tooling::{ToolExecutor, ToolRegistry};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn model_provider(endpoint: String) -> DynamicModelProvider {
    let config = ModelProviderConfig {
        id: "openai".into(),
        provider_type: "openai".into(),
        endpoint,
        api_key: None,
        api_path: None,
        models: vec![ModelInfo {
            name: "gpt-test".into(),
            display_name: None,
        }],
    };
    let mut provider = DynamicModelProvider::default();
    provider.insert(&config, OpenAIClient::new(&config, Some("test-key".into())));
    provider
}

fn tool_call_turn(calls: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": null, "tool_calls": calls } }]
    }))
}

fn text_turn(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": text } }]
    }))
}

async fn recipe_service() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "Chicken Curry" },
            { "id": 2, "title": "Chicken Soup" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "title": "Chicken Soup",
            "ingredientSections": [{ "ingredients": ["chicken", "water"] }],
            "steps": [{ "number": 1, "description": "Simmer" }]
        })))
        .mount(&server)
        .await;
    server
}

fn agent(model: DynamicModelProvider, recipes: &MockServer) -> Agent<DynamicModelProvider> {
    let registry = Arc::new(ToolRegistry::recipe_tools().expect("registry"));
    let executor = ToolExecutor::new(registry, Arc::new(HttpRecipeBackend::new(recipes.uri())));
    Agent::new(Arc::new(model), executor, "openai", "gpt-test")
}

#[tokio::test]
async fn parallel_tool_calls_are_fed_back_in_request_order() {
    let recipes = recipe_service().await;
    let oracle = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(tool_call_turn(json!([
            { "id": "call_search", "type": "function",
              "function": { "name": "searchRecipes", "arguments": "{\"term\":\"chicken\"}" } },
            { "id": "call_get", "type": "function",
              "function": { "name": "getRecipeById", "arguments": "{\"id\":2}" } }
        ])))
        .up_to_n_times(1)
        .mount(&oracle)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(text_turn("Chicken Soup simmers chicken in water."))
        .mount(&oracle)
        .await;

    let outcome = agent(model_provider(oracle.uri()), &recipes)
        .run("Search for recipes with chicken".into(), AgentOptions::default())
        .await
        .expect("run");

    assert_eq!(outcome.status, AgentStatus::Done);
    assert_eq!(outcome.steps.len(), 2);
    assert_eq!(outcome.tool_call_count(), 2);

    let requests = oracle.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
    let second: Value = requests[1].body_json().expect("json body");
    let messages = second["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1]["tool_calls"][1]["function"]["arguments"], "{\"id\":2}");
    assert_eq!(messages[2]["tool_call_id"], "call_search");
    assert_eq!(messages[3]["tool_call_id"], "call_get");

    let fetched: Value =
        serde_json::from_str(messages[3]["content"].as_str().expect("text")).expect("json");
    assert_eq!(fetched["status"], "success");
    assert_eq!(fetched["payload"]["title"], "Chicken Soup");
}

#[tokio::test]
async fn malformed_arguments_are_recoverable() {
    let recipes = recipe_service().await;
    let oracle = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(tool_call_turn(json!([
            { "id": "call_bad", "type": "function",
              "function": { "name": "getRecipeById", "arguments": "{id: two}" } }
        ])))
        .up_to_n_times(1)
        .mount(&oracle)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(text_turn("Sorry, I could not read that id."))
        .mount(&oracle)
        .await;

    let outcome = agent(model_provider(oracle.uri()), &recipes)
        .run("Show recipe two".into(), AgentOptions::default())
        .await
        .expect("run");

    assert!(outcome.is_done());
    let result = &outcome.steps[0].tool_calls[0].result;
    assert!(!result.is_success());
    assert_eq!(
        result.failure_detail().expect("failure").violations[0].message,
        "arguments must be an object, received string"
    );
}

#[tokio::test]
async fn endless_tool_use_stops_at_budget() {
    let recipes = recipe_service().await;
    let oracle = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(tool_call_turn(json!([
            { "id": "call", "type": "function",
              "function": { "name": "searchRecipes", "arguments": "{\"term\":\"chicken\"}" } }
        ])))
        .expect(2)
        .mount(&oracle)
        .await;

    let options = AgentOptions {
        max_steps: 2,
        ..AgentOptions::default()
    };
    let outcome = agent(model_provider(oracle.uri()), &recipes)
        .run("Keep searching".into(), options)
        .await
        .expect("aborted runs are not errors");

    assert_eq!(outcome.status, AgentStatus::Aborted);
    assert_eq!(outcome.steps.len(), 2);
    assert!(outcome.response.is_none());
}

#[tokio::test]
async fn oracle_outage_is_an_error() {
    let recipes = recipe_service().await;
    let oracle = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&oracle)
        .await;

    let err = agent(model_provider(oracle.uri()), &recipes)
        .run("hello".into(), AgentOptions::default())
        .await
        .expect_err("model unavailable");

    assert!(err.user_message().contains("currently unavailable"));
}
