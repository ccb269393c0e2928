//! # Fake OLA Server
//!
//! A small `axum` app answering the endpoints the monitor uses, bound to an
//! ephemeral local port. Replies are scripted per universe and every write
//! is recorded so tests can assert on what the client sent.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ola_01_server_api::{ApiError, ServerConfig, ServerContext};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How `/get_dmx` answers for one universe.
#[derive(Debug, Clone)]
pub enum DmxReply {
    /// `{"dmx": [..], "error": ""}`
    Array(Vec<Value>),
    /// `{"dmx": {"<idx>": <value>}, "error": ""}`
    Object(Vec<(usize, Value)>),
    /// `{"dmx": [], "error": "<message>"}`
    Error(String),
    /// 200 with nothing in the body.
    EmptyBody,
    /// A bare status code.
    Status(u16),
}

type Params = HashMap<String, String>;

#[derive(Debug, Default)]
struct FakeState {
    dmx: HashMap<String, DmxReply>,
    get_dmx_calls: usize,
    set_dmx: Vec<Params>,
    plugin_states: Vec<Params>,
    reloads: usize,
    quit_enabled: bool,
}

/// Handle to a running fake server. The server stops when this is dropped.
pub struct FakeOla {
    addr: SocketAddr,
    state: Arc<Mutex<FakeState>>,
    handle: JoinHandle<()>,
}

impl FakeOla {
    /// Bind to `127.0.0.1:0` and start serving on the current runtime.
    pub async fn spawn() -> std::io::Result<Self> {
        let state = Arc::new(Mutex::new(FakeState::default()));
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Base URL of the server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A context pointing at this server.
    pub fn context(&self) -> Result<ServerContext, ApiError> {
        ServerContext::new(ServerConfig::new(&self.url())?)
    }

    /// Script the `/get_dmx` reply for `universe`.
    pub fn set_reply(&self, universe: &str, reply: DmxReply) {
        self.state.lock().dmx.insert(universe.to_string(), reply);
    }

    /// Shortcut for an array reply with plain levels.
    pub fn set_levels(&self, universe: &str, levels: &[u8]) {
        let values = levels.iter().map(|v| json!(v)).collect();
        self.set_reply(universe, DmxReply::Array(values));
    }

    /// Let `/quit` succeed.
    pub fn enable_quit(&self) {
        self.state.lock().quit_enabled = true;
    }

    /// Number of `/get_dmx` requests served.
    pub fn get_dmx_calls(&self) -> usize {
        self.state.lock().get_dmx_calls
    }

    /// Forms posted to `/set_dmx`, oldest first.
    pub fn set_dmx_posts(&self) -> Vec<Params> {
        self.state.lock().set_dmx.clone()
    }

    /// Forms posted to `/set_plugin_state`, oldest first.
    pub fn plugin_state_posts(&self) -> Vec<Params> {
        self.state.lock().plugin_states.clone()
    }

    /// Number of `/reload` requests served.
    pub fn reloads(&self) -> usize {
        self.state.lock().reloads
    }
}

impl Drop for FakeOla {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

type Shared = Arc<Mutex<FakeState>>;

fn router(state: Shared) -> Router {
    Router::new()
        .route("/get_dmx", get(get_dmx))
        .route("/set_dmx", post(set_dmx))
        .route("/set_plugin_state", post(set_plugin_state))
        .route("/reload", get(reload))
        .route("/quit", get(quit))
        .route("/json/server_stats", get(server_stats))
        .route("/json/universe_plugin_list", get(universe_plugin_list))
        .route("/json/universe_info", get(universe_info))
        .route("/json/plugin_info", get(plugin_info))
        .with_state(state)
}

async fn get_dmx(State(state): State<Shared>, Query(params): Query<Params>) -> Response {
    let reply = {
        let mut state = state.lock();
        state.get_dmx_calls += 1;
        params
            .get("u")
            .and_then(|u| state.dmx.get(u).cloned())
            .unwrap_or(DmxReply::EmptyBody)
    };

    match reply {
        DmxReply::Array(values) => Json(json!({ "dmx": values, "error": "" })).into_response(),
        DmxReply::Object(entries) => {
            let dmx: serde_json::Map<String, Value> = entries
                .into_iter()
                .map(|(index, value)| (index.to_string(), value))
                .collect();
            Json(json!({ "dmx": dmx, "error": "" })).into_response()
        }
        DmxReply::Error(message) => Json(json!({ "dmx": [], "error": message })).into_response(),
        DmxReply::EmptyBody => StatusCode::OK.into_response(),
        DmxReply::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
    }
}

async fn set_dmx(State(state): State<Shared>, Form(form): Form<Params>) -> &'static str {
    state.lock().set_dmx.push(form);
    "ok"
}

async fn set_plugin_state(State(state): State<Shared>, Form(form): Form<Params>) -> &'static str {
    state.lock().plugin_states.push(form);
    "ok"
}

async fn reload(State(state): State<Shared>) -> &'static str {
    state.lock().reloads += 1;
    "ok"
}

async fn quit(State(state): State<Shared>) -> Response {
    if state.lock().quit_enabled {
        "ok".into_response()
    } else {
        StatusCode::FORBIDDEN.into_response()
    }
}

async fn server_stats() -> Json<Value> {
    Json(json!({
        "hostname": "lightdesk",
        "instance_name": "Stage",
        "ip": "192.168.1.20",
        "broadcast": "192.168.1.255",
        "subnet": "255.255.255.0",
        "hw_address": "00:11:22:33:44:55",
        "version": "0.10.9",
        "up_since": "Fri Oct 16 09:00:00 2026",
        "quit_enabled": false,
        "config_dir": "/etc/ola"
    }))
}

async fn universe_plugin_list() -> Json<Value> {
    Json(json!({
        "plugins": [
            { "id": 1, "name": "Dummy", "active": true, "enabled": true },
            { "id": 4, "name": "ArtNet" }
        ],
        "universes": [
            { "id": 1, "name": "Front Wash", "input_ports": 0, "output_ports": 1, "rdm_devices": 0 },
            { "id": 3, "name": "Stage Left", "input_ports": 1, "output_ports": 2, "rdm_devices": 4 }
        ]
    }))
}

async fn universe_info(Query(params): Query<Params>) -> Response {
    match params.get("id").map(String::as_str) {
        Some("3") => Json(json!({
            "id": 3,
            "name": "Stage Left",
            "merge_mode": "LTP",
            "input_ports": [],
            "output_ports": [
                {
                    "id": "1-1-O-0",
                    "device": "Dummy Device",
                    "description": "Dummy Port",
                    "is_output": true,
                    "priority": { "value": 100, "current_mode": "static" }
                }
            ]
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn plugin_info(Query(params): Query<Params>) -> Response {
    match params.get("id").map(String::as_str) {
        Some("1") => Json(json!({
            "name": "Dummy",
            "description": "The dummy plugin outputs nothing.",
            "active": true,
            "enabled": true
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
