//! Drives the real multipart POST against a local server.

use std::sync::{Arc, Mutex};

use arabic_ocr_uploader::upload::{OcrClient, OcrHints, UploadError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

type SeenFields = Arc<Mutex<Vec<String>>>;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn drain(mut multipart: Multipart) -> Vec<String> {
    let mut names = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("read field") {
        names.push(field.name().unwrap_or_default().to_string());
        field.bytes().await.expect("field bytes");
    }
    names
}

async fn record_fields(State(seen): State<SeenFields>, multipart: Multipart) -> Json<Value> {
    let names = drain(multipart).await;
    seen.lock().expect("lock").extend(names);
    Json(json!({ "text": "ok" }))
}

#[tokio::test]
async fn pages_shape_yields_the_first_page_text() {
    let router = Router::new().route(
        "/api/ocr",
        post(|multipart: Multipart| async move {
            drain(multipart).await;
            Json(json!({ "pages": [{ "text": "مرحبا" }, { "text": "second" }] }))
        }),
    );
    let base = serve(router).await;

    let result = OcrClient::new(base)
        .recognize_bytes("scan.png", "image/png", b"fake image".to_vec(), OcrHints::default())
        .await
        .expect("recognize");
    assert_eq!(result.text, "مرحبا");
}

#[tokio::test]
async fn text_shape_yields_the_top_level_text() {
    let router = Router::new().route(
        "/api/ocr",
        post(|multipart: Multipart| async move {
            drain(multipart).await;
            Json(json!({ "text": "Hello", "image_url": "https://example.com/page.png" }))
        }),
    );
    let base = serve(router).await;

    let result = OcrClient::new(base)
        .recognize_bytes("scan.jpg", "", b"fake".to_vec(), OcrHints::default())
        .await
        .expect("recognize");
    assert_eq!(result.text, "Hello");
    assert_eq!(result.image_url.as_deref(), Some("https://example.com/page.png"));
}

#[tokio::test]
async fn empty_pages_without_text_fails_with_no_text() {
    let router = Router::new().route(
        "/api/ocr",
        post(|multipart: Multipart| async move {
            drain(multipart).await;
            Json(json!({ "pages": [] }))
        }),
    );
    let base = serve(router).await;

    let outcome = OcrClient::new(base)
        .recognize_bytes("scan.png", "", b"fake".to_vec(), OcrHints::default())
        .await;
    assert!(matches!(outcome, Err(UploadError::NoText)));
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let router = Router::new().route(
        "/api/ocr",
        post(|multipart: Multipart| async move {
            drain(multipart).await;
            (StatusCode::INTERNAL_SERVER_ERROR, "boom")
        }),
    );
    let base = serve(router).await;

    let outcome = OcrClient::new(base)
        .recognize_bytes("scan.png", "", b"fake".to_vec(), OcrHints::default())
        .await;
    assert!(matches!(outcome, Err(UploadError::Status(500))));
}

#[tokio::test]
async fn unparsable_success_body_is_rejected() {
    let router = Router::new().route(
        "/api/ocr",
        post(|multipart: Multipart| async move {
            drain(multipart).await;
            "not json at all"
        }),
    );
    let base = serve(router).await;

    let outcome = OcrClient::new(base)
        .recognize_bytes("scan.png", "", b"fake".to_vec(), OcrHints::default())
        .await;
    assert!(matches!(outcome, Err(UploadError::InvalidBody)));
}

#[tokio::test]
async fn hint_fields_ride_along_with_the_file() {
    let seen: SeenFields = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/api/ocr", post(record_fields))
        .with_state(seen.clone());
    let base = serve(router).await;

    OcrClient::new(base)
        .recognize_bytes(
            "scan.png",
            "image/png",
            b"fake".to_vec(),
            OcrHints { mixed_language: true },
        )
        .await
        .expect("recognize");

    let names = seen.lock().expect("lock").clone();
    assert_eq!(names, vec!["file", "mixed_language", "languages"]);
}

#[tokio::test]
async fn only_the_file_field_is_sent_without_hints() {
    let seen: SeenFields = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/api/ocr", post(record_fields))
        .with_state(seen.clone());
    let base = serve(router).await;

    OcrClient::new(base)
        .recognize_bytes("scan.png", "image/png", b"fake".to_vec(), OcrHints::default())
        .await
        .expect("recognize");

    let names = seen.lock().expect("lock").clone();
    assert_eq!(names, vec!["file"]);
}
