// Stdio server tests over in-memory pipes.

use recipe_collector_core::backend::HttpRecipeBackend;
use recipe_collector_core::config::ServerIdentity;
use recipe_collector_core::rpc::McpServer;
use recipe_collector_core::tooling::{ToolExecutor, ToolRegistry};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, duplex};
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Session {
    input: DuplexStream,
    output: Lines<BufReader<DuplexStream>>,
    server: JoinHandle<Result<(), recipe_collector_core::rpc::ServerError>>,
}

impl Session {
    fn start(recipes: &MockServer) -> Self {
        let registry = Arc::new(ToolRegistry::read_only_recipe_tools().expect("registry"));
        let executor = ToolExecutor::new(registry, Arc::new(HttpRecipeBackend::new(recipes.uri())));
        let server = McpServer::new(ServerIdentity::default(), executor);

        let (input, server_in) = duplex(64 * 1024);
        let (server_out, output) = duplex(64 * 1024);
        let server =
            tokio::spawn(async move { server.serve(BufReader::new(server_in), server_out).await });

        Self {
            input,
            output: BufReader::new(output).lines(),
            server,
        }
    }

    async fn send(&mut self, line: &str) {
        self.input.write_all(line.as_bytes()).await.expect("write");
        self.input.write_all(b"\n").await.expect("newline");
    }

    async fn receive(&mut self) -> Value {
        let line = self
            .output
            .next_line()
            .await
            .expect("read")
            .expect("server produced a line");
        serde_json::from_str(&line).expect("response is one JSON line")
    }

    /// Collect `count` responses keyed by id; concurrent requests may
    /// finish in any order.
    async fn receive_by_id(&mut self, count: usize) -> HashMap<String, Value> {
        let mut responses = HashMap::new();
        for _ in 0..count {
            let response = self.receive().await;
            responses.insert(response["id"].to_string(), response);
        }
        responses
    }

    async fn finish(self) {
        drop(self.input);
        self.server
            .await
            .expect("server task")
            .expect("server exits cleanly on EOF");
    }
}

async fn recipe_service() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/search"))
        .and(query_param("query", "banana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Banana Bread",
            "ingredientSections": [{ "ingredients": ["3 bananas"] }],
            "steps": [{ "number": 1, "description": "Mash" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn handshake_and_tool_listing() {
    let recipes = recipe_service().await;
    let mut session = Session::start(&recipes);

    session
        .send(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#,
        )
        .await;
    let init = session.receive().await;
    assert_eq!(init["result"]["serverInfo"]["name"], "recipe-collector-server");
    assert_eq!(init["result"]["serverInfo"]["version"], "1.0.0");
    assert!(init["result"]["capabilities"]["tools"].is_object());

    session
        .send(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        )
        .await;
    session
        .send(
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        )
        .await;
    let list = session.receive().await;
    assert_eq!(list["id"], 2);

    let tools = list["result"]["tools"].as_array().expect("tools");
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, vec!["searchRecipes", "getRecipeById"]);
    assert_eq!(tools[1]["inputSchema"]["properties"]["id"]["minimum"], 1);

    session.finish().await;
}

#[tokio::test]
async fn tool_calls_return_results_and_failures() {
    let recipes = recipe_service().await;
    let mut session = Session::start(&recipes);

    session
        .send(
            r#"{"jsonrpc":"2.0","id":"search","method":"tools/call","params":{"name":"searchRecipes","arguments":{"term":"banana"}}}"#,
        )
        .await;
    session
        .send(
            r#"{"jsonrpc":"2.0","id":"missing","method":"tools/call","params":{"name":"getRecipeById","arguments":{"id":99}}}"#,
        )
        .await;
    session
        .send(
            r#"{"jsonrpc":"2.0","id":"bad","method":"tools/call","params":{"name":"getRecipeById","arguments":{"id":"one"}}}"#,
        )
        .await;
    session
        .send(
            r#"{"jsonrpc":"2.0","id":"add","method":"tools/call","params":{"name":"addRecipe","arguments":{"title":"x"}}}"#,
        )
        .await;

    let responses = session.receive_by_id(4).await;

    let search = &responses["\"search\""]["result"];
    assert_eq!(search["isError"], false);
    let text = search["content"][0]["text"].as_str().expect("text");
    let payload: Value = serde_json::from_str(text).expect("pretty JSON payload");
    assert_eq!(payload["title"], "Banana Bread");

    let missing = &responses["\"missing\""]["result"];
    assert_eq!(missing["isError"], true);
    assert_eq!(missing["structuredContent"]["statusCode"], 404);

    let bad = &responses["\"bad\""]["error"];
    assert_eq!(bad["code"], -32602);
    assert_eq!(bad["data"]["violations"][0]["field"], "id");

    let add = &responses["\"add\""]["error"];
    assert_eq!(add["code"], -32602);
    assert_eq!(add["data"]["tool"], "addRecipe");

    session.finish().await;
}

#[tokio::test]
async fn protocol_errors_do_not_stop_the_server() {
    let recipes = recipe_service().await;
    let mut session = Session::start(&recipes);

    session.send("this is not json").await;
    let parse = session.receive().await;
    assert_eq!(parse["error"]["code"], -32700);
    assert_eq!(parse["id"], Value::Null);

    session
        .send(
            r#"{"jsonrpc":"2.0","id":7,"method":"prompts/list"}"#,
        )
        .await;
    let unknown = session.receive().await;
    assert_eq!(unknown["error"]["code"], -32601);
    assert_eq!(unknown["id"], 7);

    session
        .send(
            r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#,
        )
        .await;
    let ping = session.receive().await;
    assert_eq!(ping["result"], json!({}));

    session.finish().await;
}
