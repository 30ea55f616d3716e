//! In-process assets backend used by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Debug, Default)]
pub struct BackendState {
    pub assets: Vec<Value>,
    pub next_id: i64,
    /// When set, every request is answered with this status and raw body.
    pub fail_with: Option<(StatusCode, String)>,
    /// When set, PUT answers 200 with this raw body instead of the asset.
    pub update_reply: Option<String>,
    pub last_body: Option<Value>,
    pub last_authorization: Option<String>,
}

pub type SharedBackend = Arc<Mutex<BackendState>>;

pub fn asset_json(id: i64, name: &str, asset_type: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": asset_type,
        "currency": "USD",
        "amount": 10,
        "created_at": "2024-01-01"
    })
}

pub fn backend(assets: Vec<Value>, next_id: i64) -> SharedBackend {
    Arc::new(Mutex::new(BackendState {
        assets,
        next_id,
        ..Default::default()
    }))
}

/// Serves the backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend(state: SharedBackend) -> String {
    let app = Router::new()
        .route("/api/assets", get(list_assets).post(create_asset))
        .route(
            "/api/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

fn raw(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn forced_failure(state: &BackendState) -> Option<Response> {
    state
        .fail_with
        .as_ref()
        .map(|(status, body)| raw(*status, body.clone()))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Asset not found" })),
    )
        .into_response()
}

async fn list_assets(State(state): State<SharedBackend>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    state.last_authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Some(failure) = forced_failure(&state) {
        return failure;
    }
    Json(state.assets.clone()).into_response()
}

async fn get_asset(State(state): State<SharedBackend>, Path(id): Path<i64>) -> Response {
    let state = state.lock().unwrap();
    if let Some(failure) = forced_failure(&state) {
        return failure;
    }
    match state.assets.iter().find(|a| a["id"] == id) {
        Some(asset) => Json(asset.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_asset(State(state): State<SharedBackend>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    state.last_body = Some(body.clone());
    if let Some(failure) = forced_failure(&state) {
        return failure;
    }

    let mut asset = body;
    asset["id"] = json!(state.next_id);
    asset["created_at"] = json!("2024-01-01");
    state.next_id += 1;
    state.assets.push(asset.clone());
    (StatusCode::CREATED, Json(asset)).into_response()
}

async fn update_asset(
    State(state): State<SharedBackend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.last_body = Some(body.clone());
    if let Some(failure) = forced_failure(&state) {
        return failure;
    }
    if let Some(reply) = state.update_reply.clone() {
        return raw(StatusCode::OK, reply);
    }

    let Some(asset) = state.assets.iter_mut().find(|a| a["id"] == id) else {
        return not_found();
    };
    if let (Some(target), Some(fields)) = (asset.as_object_mut(), body.as_object()) {
        for (key, value) in fields {
            if key != "id" {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    Json(asset.clone()).into_response()
}

async fn delete_asset(State(state): State<SharedBackend>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = forced_failure(&state) {
        return failure;
    }
    state.assets.retain(|a| a["id"] != id);
    StatusCode::NO_CONTENT.into_response()
}
