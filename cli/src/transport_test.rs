use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::*;

// =============================================================================
// Helpers
// =============================================================================

async fn serve(app: Router) -> WidgetConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    WidgetConfig { endpoint: format!("http://{addr}/travel/chat"), ..WidgetConfig::default() }
}

async fn echo(Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    Json(ChatResponse {
        response: format!("Day 1: {}\n\nMore soon", req.message),
        conversation_id: req.conversation_id.unwrap_or_else(|| "conv-1".to_owned()),
        messages: Vec::new(),
    })
}

async fn transcript(Path(id): Path<String>) -> Result<Json<Vec<TranscriptEntry>>, StatusCode> {
    if id != "conv-1" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(vec![
        TranscriptEntry { role: "user".to_owned(), content: "Lisbon".to_owned() },
        TranscriptEntry { role: "assistant".to_owned(), content: "Day 1: Lisbon".to_owned() },
    ]))
}

async fn drop_conversation(Path(id): Path<String>) -> StatusCode {
    if id == "conv-1" { StatusCode::OK } else { StatusCode::NOT_FOUND }
}

fn travel_api() -> Router {
    Router::new()
        .route("/travel/chat", post(echo))
        .route("/travel/conversations/{id}", get(transcript).delete(drop_conversation))
}

fn transport(config: &WidgetConfig) -> HttpTransport {
    HttpTransport::new(config, Timeouts { request_secs: 5, connect_secs: 2 }).unwrap()
}

// =============================================================================
// send
// =============================================================================

#[tokio::test]
async fn send_posts_json_and_parses_reply() {
    let config = serve(travel_api()).await;
    let transport = transport(&config);

    let req = ChatRequest { message: "Lisbon".to_owned(), conversation_id: None };
    let resp = transport.send(&req).await.unwrap();

    assert_eq!(resp.conversation_id, "conv-1");
    assert_eq!(resp.response, "Day 1: Lisbon\n\nMore soon");
}

#[tokio::test]
async fn send_forwards_existing_conversation_id() {
    let config = serve(travel_api()).await;
    let transport = transport(&config);

    let req = ChatRequest { message: "Museums".to_owned(), conversation_id: Some("conv-77".to_owned()) };
    let resp = transport.send(&req).await.unwrap();

    assert_eq!(resp.conversation_id, "conv-77");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let app = Router::new().route("/travel/chat", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let config = serve(app).await;

    let req = ChatRequest { message: "hi".to_owned(), conversation_id: None };
    let err = transport(&config).send(&req).await.unwrap_err();

    assert_eq!(err, ChatError::Status { status: 500 });
}

#[tokio::test]
async fn non_json_body_maps_to_decode() {
    let app = Router::new().route("/travel/chat", post(|| async { "<html>maintenance</html>" }));
    let config = serve(app).await;

    let req = ChatRequest { message: "hi".to_owned(), conversation_id: None };
    let err = transport(&config).send(&req).await.unwrap_err();

    assert!(matches!(err, ChatError::Decode(_)));
}

#[tokio::test]
async fn closed_port_maps_to_transport() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = WidgetConfig { endpoint: format!("http://{addr}/travel/chat"), ..WidgetConfig::default() };

    let req = ChatRequest { message: "hi".to_owned(), conversation_id: None };
    let err = transport(&config).send(&req).await.unwrap_err();

    assert!(err.is_unreachable());
}

// =============================================================================
// history / forget
// =============================================================================

#[tokio::test]
async fn history_fetches_transcript() {
    let config = serve(travel_api()).await;
    let entries = transport(&config).history("conv-1").await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].content, "Lisbon");
}

#[tokio::test]
async fn history_of_unknown_conversation_is_404() {
    let config = serve(travel_api()).await;
    let err = transport(&config).history("nope").await.unwrap_err();
    assert_eq!(err, ChatError::Status { status: 404 });
}

#[tokio::test]
async fn forget_deletes_conversation() {
    let config = serve(travel_api()).await;
    let transport = transport(&config);
    assert_eq!(transport.forget("conv-1").await, Ok(()));
    assert_eq!(transport.forget("nope").await, Err(ChatError::Status { status: 404 }));
}
