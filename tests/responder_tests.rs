//! Contract tests for discovery request resolution
//!
//! Drives the responder directly with synthetic requests and an in-memory
//! registry; no transport involved.

use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use std::collections::HashMap;
use std::sync::Arc;
use vanityd::http::responder;
use vanityd::Registry;

fn widget_registry() -> Registry {
    let mut modules = HashMap::new();
    modules.insert(
        "widget".to_string(),
        "https://example.com/widget.git".to_string(),
    );
    Registry::from_entries(modules)
}

fn discovery_request(uri: &str, host: &str) -> Request<()> {
    Request::builder()
        .uri(uri)
        .header("Host", host)
        .body(())
        .unwrap()
}

async fn body_string(response: Response<Full<Bytes>>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn resolves_configured_module_to_import_page() {
    let registry = widget_registry();
    let req = discovery_request("/widget?go-get=1", "go.example.org");

    let response = responder::respond(&registry, &req);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(response).await;
    assert_eq!(
        body,
        "<!doctype html>\n\
         <html>\n  \
           <head>\n    \
             <meta name=\"go-import\" content=\"go.example.org/widget git https://example.com/widget.git\">\n  \
           </head>\n  \
           <body>OK</body>\n\
         </html>"
    );
}

#[tokio::test]
async fn identical_requests_yield_identical_responses() {
    let registry = widget_registry();

    let first = responder::respond(&registry, &discovery_request("/widget?go-get=1", "h.example"));
    let second = responder::respond(&registry, &discovery_request("/widget?go-get=1", "h.example"));

    assert_eq!(first.status(), second.status());
    assert_eq!(first.headers(), second.headers());
    assert_eq!(body_string(first).await, body_string(second).await);
}

#[tokio::test]
async fn rejections_carry_the_default_not_found_body() {
    let registry = widget_registry();

    for uri in ["/widget", "/widget?go-get=0", "/unknown?go-get=1", "/?go-get=1"] {
        let response = responder::respond(&registry, &discovery_request(uri, "go.example.org"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {}", uri);
        assert_eq!(body_string(response).await, "404 page not found\n", "uri {}", uri);
    }
}

#[tokio::test]
async fn registry_is_shared_without_locking() {
    // Concurrent lookups against one shared registry; every task sees the
    // same immutable mapping.
    let registry = Arc::new(widget_registry());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            let req = discovery_request("/widget?go-get=1", "go.example.org");
            responder::respond(&registry, &req).status()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
}
