//! In-process stand-in for the Chat Completions endpoint, used by tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Default)]
struct Recorded {
    hits: AtomicUsize,
    last_request: Mutex<Option<Value>>,
    last_auth: Mutex<Option<String>>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    recorded: Arc<Recorded>,
}

pub(crate) struct MockLlm {
    pub base_url: String,
    recorded: Arc<Recorded>,
}

impl MockLlm {
    /// Serves `POST /chat/completions` on an ephemeral port, always answering `status` + `body`.
    pub async fn spawn(status: StatusCode, body: String) -> Self {
        let recorded = Arc::new(Recorded::default());
        let state = MockState {
            status,
            body: Arc::new(body),
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/chat/completions", post(handle_completion))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn hits(&self) -> usize {
        self.recorded.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Value> {
        self.recorded.last_request.lock().unwrap().clone()
    }

    pub fn last_auth(&self) -> Option<String> {
        self.recorded.last_auth.lock().unwrap().clone()
    }
}

async fn handle_completion(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> (StatusCode, String) {
    state.recorded.hits.fetch_add(1, Ordering::SeqCst);
    *state.recorded.last_request.lock().unwrap() = Some(request);
    *state.recorded.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (state.status, state.body.to_string())
}

/// A successful Chat Completions body whose first choice carries `content`.
pub(crate) fn completion_body(content: &str) -> String {
    json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 42, "completion_tokens": 7}
    })
    .to_string()
}
