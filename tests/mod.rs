//! tests/mod.rs
//! A shared test helper that spawns a small Axum app, whose handlers answer
//! through this crate's response builders, on an ephemeral port.

use axum::http::StatusCode;
use axum::{routing::get, serve, Router};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use tokio::net::TcpListener as TokioTcpListener;

use api_response::{fail, success, ApiResponse};

/// A value whose serialization always fails, to drive the encoding fallback.
pub struct Broken;

impl Serialize for Broken {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("deliberately not serializable"))
    }
}

async fn ok_handler() -> ApiResponse<Value> {
    success(json!({"foo": "bar"})).message("ok")
}

async fn fail_handler() -> ApiResponse<()> {
    fail("bad").status(StatusCode::UNPROCESSABLE_ENTITY)
}

async fn tagged_handler() -> ApiResponse<Value> {
    success(json!({}))
        .header("X-Tags", ["a", "b"])
        .header("X-Test", "value")
}

async fn plain_handler() -> ApiResponse<Value> {
    // casing is deliberately odd; it must still count as a Content-Type
    success(json!({})).header("CONTENT-TYPE", "text/plain")
}

async fn broken_handler() -> ApiResponse<Broken> {
    success(Broken).message("never seen")
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    api_response::init_tracing();

    let app: Router = Router::new()
        .route("/ok", get(ok_handler))
        .route("/fail", get(fail_handler))
        .route("/tagged", get(tagged_handler))
        .route("/plain", get(plain_handler))
        .route("/broken", get(broken_handler));

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener =
        TokioTcpListener::from_std(std_listener).expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app).await.expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
