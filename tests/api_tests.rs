// tests/api_tests.rs

use std::sync::Arc;

use trivia::{
    config::Config,
    routes,
    state::{AppState, SharedStore},
    store::{LeaderboardStore, MemoryStore, SqliteStore},
};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app_with(store: SharedStore) -> String {
    let config = Config {
        rust_log: "error".to_string(),
        ..Config::default()
    };

    let state = AppState { store, config };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn spawn_app() -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let address = spawn_app_with(store.clone()).await;
    (address, store)
}

async fn submit(client: &reqwest::Client, address: &str, body: serde_json::Value) -> reqwest::Response {
    client
        .post(&format!("{}/api/leaderboard", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

async fn leaderboard(client: &reqwest::Client, address: &str) -> Vec<serde_json::Value> {
    let response = client
        .get(&format!("{}/api/leaderboard", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
    response.json().await.expect("Failed to parse leaderboard")
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn every_difficulty_serves_answerable_questions() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    for difficulty in ["easy", "medium", "hard"] {
        let response = client
            .get(&format!("{}/api/questions/{}", address, difficulty))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 200);

        let questions: Vec<serde_json::Value> = response.json().await.unwrap();
        assert!(!questions.is_empty(), "{} has no questions", difficulty);
        for q in &questions {
            let options: Vec<&str> = q["options"]
                .as_array()
                .unwrap()
                .iter()
                .map(|o| o.as_str().unwrap())
                .collect();
            let answer = q["answer"].as_str().unwrap();
            assert!(options.contains(&answer));
            assert!(q["question"].is_string());
        }
    }
}

#[tokio::test]
async fn unknown_difficulty_is_not_found() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/questions/unknown", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Difficulty not found");
}

#[tokio::test]
async fn empty_leaderboard_is_empty_list() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    assert!(leaderboard(&client, &address).await.is_empty());
}

#[tokio::test]
async fn submit_then_list_includes_entry() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": "dave", "score": 3, "total": 5, "difficulty": "easy" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));

    let entries = leaderboard(&client, &address).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["username"], "dave");
    assert_eq!(entries[0]["score"], 3);
    assert_eq!(entries[0]["total"], 5);
    assert_eq!(entries[0]["difficulty"], "easy");
    assert!(entries[0]["createdAt"].is_string());
}

#[tokio::test]
async fn submit_with_missing_fields_is_rejected() {
    let (address, store) = spawn_app().await;
    let client = reqwest::Client::new();

    let bodies = [
        serde_json::json!({ "score": 3, "total": 5, "difficulty": "easy" }),
        serde_json::json!({ "username": null, "score": 3, "total": 5, "difficulty": "easy" }),
        serde_json::json!({ "username": "", "score": 3, "total": 5, "difficulty": "easy" }),
        serde_json::json!({ "username": "dave", "total": 5, "difficulty": "easy" }),
        serde_json::json!({ "username": "dave", "score": 3, "difficulty": "easy" }),
        serde_json::json!({ "username": "dave", "score": 3, "total": 5 }),
    ];

    for body in bodies {
        let response = submit(&client, &address, body.clone()).await;
        assert_eq!(response.status().as_u16(), 400, "accepted {}", body);
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json["error"], "Missing required score data");
    }

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn mistyped_fields_are_client_errors() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": "dave", "score": "three", "total": 5, "difficulty": "easy" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": "dave", "score": -1, "total": 5, "difficulty": "easy" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn long_username_is_accepted() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();
    let long_name = "x".repeat(101);

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": long_name, "score": 3, "total": 5, "difficulty": "easy" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);

    let entries = leaderboard(&client, &address).await;
    assert_eq!(entries[0]["username"], long_name.as_str());
}

#[tokio::test]
async fn zero_score_is_accepted() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": "zoe", "score": 0, "total": 3, "difficulty": "hard" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn leaderboard_is_ranked_and_stable() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    for (name, score) in [("alice", 5), ("bob", 8), ("carol", 5)] {
        let response = submit(
            &client,
            &address,
            serde_json::json!({ "username": name, "score": score, "total": 10, "difficulty": "medium" }),
        )
        .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let first = leaderboard(&client, &address).await;
    let names: Vec<&str> = first.iter().map(|e| e["username"].as_str().unwrap()).collect();
    assert_eq!(names, ["bob", "alice", "carol"]);

    let second = leaderboard(&client, &address).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn store_failures_are_server_errors() {
    let (address, store) = spawn_app().await;
    let client = reqwest::Client::new();
    store.set_failing(true);

    let response = client
        .get(&format!("{}/api/leaderboard", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Could not fetch leaderboard");

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": "dave", "score": 3, "total": 5, "difficulty": "easy" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Could not save score");
}

#[tokio::test]
async fn sqlite_backed_app_persists_scores() {
    let store = SqliteStore::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory sqlite");
    let address = spawn_app_with(Arc::new(store)).await;
    let client = reqwest::Client::new();
    let unique_name = format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8]);

    let response = submit(
        &client,
        &address,
        serde_json::json!({ "username": unique_name, "score": 2, "total": 3, "difficulty": "hard" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);

    let entries = leaderboard(&client, &address).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["username"], unique_name.as_str());
    assert_eq!(entries[0]["score"], 2);
}

#[tokio::test]
async fn openapi_document_lists_operations() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let doc: serde_json::Value = client
        .get(&format!("{}/api/openapi.json", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert!(doc["paths"]["/api/questions/{difficulty}"]["get"].is_object());
    assert!(doc["paths"]["/api/leaderboard"]["get"].is_object());
    assert!(doc["paths"]["/api/leaderboard"]["post"].is_object());
}
