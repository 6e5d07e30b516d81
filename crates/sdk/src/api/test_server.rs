use std::{net::SocketAddr, time::Duration};

use serde::{Deserialize, Serialize};
use warp::{
    http::{HeaderMap, StatusCode},
    path::FullPath,
    reply::{self, WithStatus},
    Filter, Rejection,
};

/// What the test server saw of a request, echoed back as the response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

pub fn config_json(baseurl: &str, version: &str, key: &str) -> String {
    format!(
        r#"{{
            "api": {{ "key": "{}", "version": "{}", "baseurl": "{}" }},
            "account": {{ "username": "foo", "password": "bar" }}
        }}"#,
        key, version, baseurl
    )
}

async fn handle_request(
    path: FullPath,
    query: String,
    headers: HeaderMap,
) -> Result<WithStatus<String>, Rejection> {
    let path = path.as_str().to_string();

    if path.ends_with("/slow") {
        tokio::time::sleep(Duration::from_secs(3)).await;
    }

    let status = if path.contains("/missing") {
        StatusCode::NOT_FOUND
    } else if path.contains("/broken") {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    let header = |name: &str| {
        headers.get(name).and_then(|value| value.to_str().ok()).map(|value| value.to_string())
    };

    let echo = EchoResponse {
        path,
        query,
        authorization: header("authorization"),
        content_type: header("content-type"),
    };
    let body = serde_json::to_string(&echo).unwrap_or_default();

    Ok(reply::with_status(body, status))
}

/// Starts an echo server on an ephemeral localhost port.
///
/// Paths containing `/missing` answer 404, `/broken` answers 500 and paths ending in
/// `/slow` wait three seconds before answering.
pub async fn start_test_server() -> SocketAddr {
    let routes = warp::get()
        .and(warp::path::full())
        .and(warp::query::raw().or(warp::any().map(String::new)).unify())
        .and(warp::header::headers_cloned())
        .and_then(handle_request);

    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    addr
}
