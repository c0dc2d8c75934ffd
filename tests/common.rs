// tests/common.rs

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use std::io::{BufRead, BufReader, Cursor, Write};
use std::process::Command;
use std::sync::{Arc, Mutex};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the CLI tests, but not all.
pub fn repo2ai_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("repo2ai"));
    cmd.env_remove("GITHUB_TOKEN").env("NO_PROXY", "127.0.0.1");
    cmd
}

/// How the mock answers the repository metadata request.
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub enum Metadata {
    /// `{"default_branch": "<name>"}`
    Branch(String),
    /// `{}`
    MissingField,
    /// 404 Not Found
    NotFound,
}

/// A GitHub stand-in serving both the REST API and branch archives on one port.
#[allow(dead_code)]
pub struct MockGitHub {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockGitHub {
    /// Every request path the server has seen, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

struct MockState {
    metadata: Metadata,
    archive: Option<Vec<u8>>,
    hits: Arc<Mutex<Vec<String>>>,
}

async fn handle(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state.hits.lock().unwrap().push(path.clone());

    if path.starts_with("/repos/") {
        return match &state.metadata {
            Metadata::Branch(name) => {
                Json(serde_json::json!({ "default_branch": name })).into_response()
            }
            Metadata::MissingField => Json(serde_json::json!({})).into_response(),
            Metadata::NotFound => StatusCode::NOT_FOUND.into_response(),
        };
    }

    if path.contains("/archive/refs/heads/") && path.ends_with(".zip") {
        return match &state.archive {
            Some(bytes) => bytes.clone().into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        };
    }

    StatusCode::NOT_FOUND.into_response()
}

/// Starts a mock server on an ephemeral port in a background thread.
///
/// `archive` is served for any branch archive path; `None` answers 404.
/// The server lives until the test process exits.
#[allow(dead_code)]
pub fn spawn_mock_github(metadata: Metadata, archive: Option<Vec<u8>>) -> MockGitHub {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(MockState {
        metadata,
        archive,
        hits: Arc::clone(&hits),
    });

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let port = listener.local_addr().unwrap().port();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let app = Router::new().fallback(handle).with_state(state);
            axum::serve(listener, app).await.unwrap();
        });
    });

    MockGitHub {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

/// Starts a bare TCP server that answers every connection with `response`
/// verbatim and then closes it, for replies axum would refuse to produce.
#[allow(dead_code)]
pub fn spawn_raw_http(response: Vec<u8>) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let Ok(read_half) = stream.try_clone() else { continue };
            let mut reader = BufReader::new(read_half);
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let _ = stream.write_all(&response);
            let _ = stream.flush();
        }
    });

    format!("http://127.0.0.1:{}", port)
}

/// Builds an in-memory ZIP. Names ending in `/` become directory entries.
#[allow(dead_code)]
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}
