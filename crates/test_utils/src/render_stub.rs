//! Local Rendering Service Stub
//!
//! Spins up an axum server on an ephemeral localhost port that answers the
//! rendering endpoints with scripted responses and records every request in
//! arrival order. Paths without a script answer 404.

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Content returned by the stub for the fake rendered document
pub const STUB_PDF: &[u8] = b"%PDF-1.4\n% statement stub\n%%EOF\n";

/// A scripted response for one path
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl StubResponse {
    /// A 200 response carrying `STUB_PDF`
    pub fn pdf() -> Self {
        Self::pdf_bytes(STUB_PDF)
    }

    /// A 200 response carrying the given bytes
    pub fn pdf_bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
        }
    }

    /// A response with the given status and a short text body
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: format!("status {status}").into_bytes(),
        }
    }
}

/// One request received by the stub
#[derive(Debug, Clone)]
pub struct StubHit {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl StubHit {
    /// Decodes the request body as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("stub request body is JSON")
    }
}

/// A running rendering stub
pub struct RenderStub {
    base_url: String,
    hits: Arc<Mutex<Vec<StubHit>>>,
    handle: JoinHandle<()>,
}

impl RenderStub {
    /// Starts a stub answering each `(path, response)` pair
    ///
    /// `POST` returns the scripted response; `GET` returns a short usage
    /// banner with status 200, like the real rendering service.
    pub async fn spawn(routes: Vec<(&'static str, StubResponse)>) -> Self {
        let hits: Arc<Mutex<Vec<StubHit>>> = Arc::new(Mutex::new(Vec::new()));
        let mut router = Router::new();

        for (path, response) in routes {
            let post_hits = hits.clone();
            let get_hits = hits.clone();

            let on_post = move |body: Bytes| {
                let hits = post_hits.clone();
                let response = response.clone();
                async move {
                    hits.lock().expect("hit log").push(StubHit {
                        method: "POST".to_string(),
                        path: path.to_string(),
                        body: body.to_vec(),
                    });
                    let status = StatusCode::from_u16(response.status)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                    (status, [(header::CONTENT_TYPE, "application/pdf")], response.body)
                }
            };

            let on_get = move || {
                let hits = get_hits.clone();
                async move {
                    hits.lock().expect("hit log").push(StubHit {
                        method: "GET".to_string(),
                        path: path.to_string(),
                        body: Vec::new(),
                    });
                    "Send a POST request with JSON data to generate PDF."
                }
            };

            router = router.route(path, post(on_post).get(on_get));
        }

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind render stub");
        let addr = listener.local_addr().expect("render stub address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
            handle,
        }
    }

    /// Base URL of the stub, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request received so far, in arrival order
    pub fn hits(&self) -> Vec<StubHit> {
        self.hits.lock().expect("hit log").clone()
    }

    /// Paths of the `POST` requests received so far, in arrival order
    pub fn posted_paths(&self) -> Vec<String> {
        self.hits()
            .into_iter()
            .filter(|h| h.method == "POST")
            .map(|h| h.path)
            .collect()
    }
}

impl Drop for RenderStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
