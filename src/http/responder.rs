//! Discovery request resolution
//!
//! The responder is the whole request-handling rule: extract the module name
//! from the path, gate on the discovery flag, look up the registry, and
//! render the `go-import` meta tag. It is a pure function over the request
//! and a read-only registry, so tests drive it directly with synthetic
//! requests and never need a live transport.

use bytes::Bytes;
use http::header::{self, HeaderValue};
use http::{Request, Response, StatusCode};
use http_body_util::Full;

use crate::registry::Registry;

/// Query parameter that marks a discovery probe
pub const DISCOVERY_FLAG: &str = "go-get";

/// Protocol name emitted in the meta tag repository field
const VCS_PROTOCOL: &str = "git";

/// Resolve a discovery request against the registry
///
/// Both rejection paths (flag missing/invalid and module unknown) produce
/// the identical not-found response. Discovery clients retry the same URL
/// with and without the flag, so the two cases must be indistinguishable
/// to the caller.
pub fn respond<B>(registry: &Registry, req: &Request<B>) -> Response<Full<Bytes>> {
    // Strip exactly one leading separator; the remainder (possibly empty)
    // is the module name. No further normalization.
    let path = req.uri().path();
    let module = path.strip_prefix('/').unwrap_or(path);

    if query_value(req.uri().query().unwrap_or(""), DISCOVERY_FLAG) != Some("1") {
        return not_found();
    }

    let Some(repo) = registry.lookup(module) else {
        return not_found();
    };

    discovery_page(host(req), module, repo)
}

/// First value of a query parameter, without percent-decoding
///
/// A bare key (`?go-get`) carries the empty value, and only the first
/// occurrence of a repeated key is consulted.
fn query_value<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then_some(v)
    })
}

/// Host the client addressed, used verbatim as the import path prefix
fn host<B>(req: &Request<B>) -> &str {
    if let Some(value) = req.headers().get(header::HOST).and_then(|v| v.to_str().ok()) {
        return value;
    }
    req.uri().authority().map(|a| a.as_str()).unwrap_or("")
}

/// Render the discovery document for a resolved module
fn discovery_page(host: &str, module: &str, repo: &str) -> Response<Full<Bytes>> {
    let meta = format!(
        r#"<meta name="go-import" content="{}/{} {} {}">"#,
        host, module, VCS_PROTOCOL, repo
    );
    let page = format!(
        "<!doctype html>\n<html>\n  <head>\n    {}\n  </head>\n  <body>OK</body>\n</html>",
        meta
    );

    let mut response = Response::new(Full::new(Bytes::from(page)));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

/// Uniform not-found response for both the gate and the lookup miss
fn not_found() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(b"404 page not found\n")));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}
