use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

const SERVICE: &str = "/akuity.io.kargo.service.v1alpha1.KargoService";

#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: String,
    pub body: serde_json::Value,
    pub authorization: Option<String>,
}

#[derive(Clone, Debug)]
struct RpcFailure {
    status: u16,
    code: String,
    message: String,
}

#[derive(Clone, Debug)]
enum StageReply {
    Created(String),
    Failed(RpcFailure),
}

#[derive(Clone, Debug)]
struct SubscribersReply {
    created: Vec<String>,
    failure: Option<RpcFailure>,
}

struct StubState {
    stage: StageReply,
    subscribers: SubscribersReply,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubState {
    fn record(&self, method: &str, headers: &HeaderMap, body: &serde_json::Value) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.calls
            .lock()
            .expect("stub calls lock")
            .push(RecordedCall {
                method: method.to_string(),
                body: body.clone(),
                authorization,
            });
    }
}

/// Stand-in for the promotion endpoints of the API server.
pub struct StubServer {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubServer {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("stub calls lock").clone()
    }
}

pub struct StubBuilder {
    stage: StageReply,
    subscribers: SubscribersReply,
    delay: Duration,
}

#[allow(dead_code)]
pub fn stub() -> StubBuilder {
    StubBuilder {
        stage: StageReply::Created("promo-1".to_string()),
        subscribers: SubscribersReply {
            created: Vec::new(),
            failure: None,
        },
        delay: Duration::ZERO,
    }
}

#[allow(dead_code)]
impl StubBuilder {
    pub fn stage_created(mut self, name: &str) -> Self {
        self.stage = StageReply::Created(name.to_string());
        self
    }

    pub fn stage_failed(mut self, status: u16, code: &str, message: &str) -> Self {
        self.stage = StageReply::Failed(RpcFailure {
            status,
            code: code.to_string(),
            message: message.to_string(),
        });
        self
    }

    pub fn subscribers_created(mut self, names: &[&str]) -> Self {
        self.subscribers.created = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn subscribers_failed(mut self, status: u16, code: &str, message: &str) -> Self {
        self.subscribers.failure = Some(RpcFailure {
            status,
            code: code.to_string(),
            message: message.to_string(),
        });
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn spawn(self) -> Result<StubServer> {
        let listener = TcpListener::bind("127.0.0.1:0").context("bind stub listener")?;
        listener
            .set_nonblocking(true)
            .context("set stub listener nonblocking")?;
        let addr = listener.local_addr().context("stub local addr")?;

        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(StubState {
            stage: self.stage,
            subscribers: self.subscribers,
            delay: self.delay,
            calls: calls.clone(),
        });
        let app = Router::new()
            .route(&format!("{}/PromoteStage", SERVICE), post(promote_stage))
            .route(
                &format!("{}/PromoteSubscribers", SERVICE),
                post(promote_subscribers),
            )
            .with_state(state);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("build stub runtime")?;
        std::thread::spawn(move || {
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt stub listener");
                axum::serve(listener, app).await.expect("serve stub");
            });
        });

        Ok(StubServer {
            base_url: format!("http://{}", addr),
            calls,
        })
    }
}

fn promotion_json(name: &str, req: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "name": name,
            "namespace": req["project"],
            "creationTimestamp": "2026-10-17T09:00:00Z"
        },
        "spec": {
            "stage": req["stage"],
            "freight": req.get("freight").cloned().unwrap_or_else(|| req["freightAlias"].clone())
        }
    })
}

fn failure_response(failure: &RpcFailure, created: Vec<serde_json::Value>) -> Response {
    let status = StatusCode::from_u16(failure.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = serde_json::json!({
        "code": failure.code,
        "message": failure.message,
    });
    if !created.is_empty() {
        body["promotions"] = serde_json::Value::Array(created);
    }
    (status, Json(body)).into_response()
}

async fn promote_stage(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(req): Json<serde_json::Value>,
) -> Response {
    state.record("PromoteStage", &headers, &req);
    tokio::time::sleep(state.delay).await;
    match &state.stage {
        StageReply::Created(name) => {
            Json(serde_json::json!({ "promotion": promotion_json(name, &req) })).into_response()
        }
        StageReply::Failed(failure) => failure_response(failure, Vec::new()),
    }
}

async fn promote_subscribers(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(req): Json<serde_json::Value>,
) -> Response {
    state.record("PromoteSubscribers", &headers, &req);
    tokio::time::sleep(state.delay).await;
    let created = state
        .subscribers
        .created
        .iter()
        .map(|name| promotion_json(name, &req))
        .collect::<Vec<_>>();
    match &state.subscribers.failure {
        None => Json(serde_json::json!({ "promotions": created })).into_response(),
        Some(failure) => failure_response(failure, created),
    }
}

/// Runs the `kargo` binary with an isolated config file.
#[allow(dead_code)]
pub fn run_kargo(config: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_kargo"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("KARGO_CONFIG")
        .env_remove("KARGO_LOG")
        .output()
        .with_context(|| format!("run kargo {:?}", args))
}

#[allow(dead_code)]
pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
