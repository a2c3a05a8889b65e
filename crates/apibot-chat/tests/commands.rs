//! End-to-end command flow tests against a local stub API

use apibot_chat::{build_registry, BotContext, CommandSync, Dispatcher, ReplyColor};
use apibot_core::{
    CommandDefinition, CommandInvocation, Error, LatencyTracker, Result, Settings,
};
use apibot_http::ApiClient;
use async_trait::async_trait;
use axum::{http::StatusCode, routing::get, Router};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// CommandSync stub that counts registration attempts.
#[derive(Default)]
struct RecordingSync {
    calls: AtomicUsize,
}

#[async_trait]
impl CommandSync for RecordingSync {
    async fn sync_commands(&self, definitions: &[CommandDefinition]) -> Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(definitions.len())
    }
}

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn settings(base_url: &str) -> Settings {
    Settings {
        bot_token: "test-token".to_string(),
        api_base_url: base_url.to_string(),
        gateway_url: "ws://127.0.0.1:1/ws".to_string(),
        platform_api_url: "http://127.0.0.1:1".to_string(),
        owner: Some("owner".to_string()),
        request_timeout_secs: 5,
    }
}

fn context(base_url: &str, sync: Arc<RecordingSync>) -> BotContext {
    let settings = settings(base_url);
    let api = ApiClient::new(base_url, Duration::from_secs(5)).unwrap();
    BotContext::new(settings, api, LatencyTracker::new(), sync)
}

fn invocation(command: &str, arguments: serde_json::Value, sender: &str) -> CommandInvocation {
    CommandInvocation::new(command, arguments, sender, "general")
}

#[tokio::test]
async fn test_list_operations_one_field_per_path() {
    let app = Router::new().route(
        "/openapi.json",
        get(|| async {
            json!({
                "paths": {
                    "/users": {"get": {}, "post": {}, "description": "User routes"},
                    "/health": {"get": {}}
                }
            })
            .to_string()
        }),
    );
    let base = spawn_stub(app).await;
    let ctx = context(&base, Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("list_operations", json!({}), "alice"))
        .await;

    assert!(!reply.is_error());
    assert_eq!(reply.fields.len(), 2);
    assert_eq!(reply.fields[0].name, "Path: /users");
    assert!(reply.fields[0].value.contains("get, post"));
    assert!(reply.fields[0].value.contains("User routes"));
}

#[tokio::test]
async fn test_list_operations_empty_paths_is_not_an_error() {
    let app = Router::new().route("/openapi.json", get(|| async { r#"{"paths":{}}"# }));
    let base = spawn_stub(app).await;
    let ctx = context(&base, Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("list_operations", json!({}), "alice"))
        .await;

    assert!(!reply.is_error());
    assert!(reply.fields.is_empty());
}

#[tokio::test]
async fn test_list_operations_http_500_surfaces_status() {
    let app = Router::new().route(
        "/openapi.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_stub(app).await;
    let ctx = context(&base, Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("list_operations", json!({}), "alice"))
        .await;

    assert!(reply.is_error());
    assert!(reply.body.as_deref().unwrap().contains("500"));
}

#[tokio::test]
async fn test_list_operations_malformed_json_distinct_from_status() {
    let app = Router::new().route("/openapi.json", get(|| async { "{not json" }));
    let base = spawn_stub(app).await;
    let ctx = context(&base, Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("list_operations", json!({}), "alice"))
        .await;

    assert!(reply.is_error());
    let body = reply.body.as_deref().unwrap();
    assert!(body.contains("parse"));
    assert!(!body.contains("HTTP 5"));
}

#[tokio::test]
async fn test_call_api_round_trip_verbatim() {
    let app = Router::new().route("/health", get(|| async { r#"{"status":"ok"}"# }));
    let base = spawn_stub(app).await;
    let ctx = context(&base, Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(
            &ctx,
            &invocation("call_api", json!({"route": "/health"}), "alice"),
        )
        .await;

    assert!(!reply.is_error());
    assert_eq!(reply.body.as_deref(), Some(r#"{"status":"ok"}"#));
}

#[tokio::test]
async fn test_call_api_http_500_is_error_not_success() {
    let app = Router::new().route(
        "/broken",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "secret body") }),
    );
    let base = spawn_stub(app).await;
    let ctx = context(&base, Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(
            &ctx,
            &invocation("call_api", json!({"route": "/broken"}), "alice"),
        )
        .await;

    assert!(reply.is_error());
    assert!(reply.body.as_deref().unwrap().contains("500"));
    assert_eq!(reply.color, ReplyColor::Red);
}

#[tokio::test]
async fn test_call_api_missing_route_argument() {
    let ctx = context("http://127.0.0.1:1", Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("call_api", json!({}), "alice"))
        .await;

    assert!(reply.is_error());
    assert!(reply.body.as_deref().unwrap().contains("route"));
}

#[tokio::test]
async fn test_call_api_unreachable_api_is_transport_error() {
    let ctx = context("http://127.0.0.1:1", Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(
            &ctx,
            &invocation("call_api", json!({"route": "/health"}), "alice"),
        )
        .await;

    assert!(reply.is_error());
    assert!(reply.body.as_deref().unwrap().contains("reach"));
}

#[tokio::test]
async fn test_sync_non_owner_refused_without_registration() {
    let sync = Arc::new(RecordingSync::default());
    let ctx = context("http://127.0.0.1:1", sync.clone());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("sync", json!({}), "impostor"))
        .await;

    assert!(reply.is_error());
    assert_eq!(sync.calls.load(Ordering::SeqCst), 0);
    assert!(!reply.body.as_deref().unwrap().contains("Synced"));
}

#[tokio::test]
async fn test_sync_owner_reports_count() {
    let sync = Arc::new(RecordingSync::default());
    let ctx = context("http://127.0.0.1:1", sync.clone());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("sync", json!({}), "owner"))
        .await;

    assert!(!reply.is_error());
    assert_eq!(sync.calls.load(Ordering::SeqCst), 1);
    assert_eq!(reply.body.as_deref(), Some("Synced 4 commands globally"));
}

#[tokio::test]
async fn test_unknown_command_produces_error_reply() {
    let ctx = context("http://127.0.0.1:1", Arc::default());
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("frobnicate", json!({}), "alice"))
        .await;

    assert!(reply.is_error());
    assert!(reply.body.as_deref().unwrap().contains("frobnicate"));
}

#[tokio::test]
async fn test_ping_uses_tracker_latency() {
    let ctx = context("http://127.0.0.1:1", Arc::default());
    ctx.latency.record(120);
    let dispatcher = Dispatcher::new(build_registry());

    let reply = dispatcher
        .dispatch(&ctx, &invocation("ping", json!({}), "alice"))
        .await;

    assert!(!reply.is_error());
    assert_eq!(reply.color, ReplyColor::Red);
    assert_eq!(reply.body.as_deref(), Some("Latency: 120 ms"));
}

// Error kind unit check kept here since it spans crates: reqwest transport
// failures must not be reported as status errors.
#[tokio::test]
async fn test_transport_and_status_kinds_are_distinct() {
    let api = ApiClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let err = api.fetch_text("/x").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
