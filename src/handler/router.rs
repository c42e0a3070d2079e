//! Request intake module
//!
//! Entry point for HTTP request processing: extracts the request context,
//! dispatches to the SPA resolver and emits the access log entry.

use crate::config::AppState;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating what resolution and content transfer need.
/// The HTTP method never influences resolution; `is_head` only controls body
/// suppression in the content responder.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    /// Escaped fragment, when the embedding has one. Fragments do not survive
    /// URI parsing on the wire, so transport requests carry `None`.
    pub fragment: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let ctx = RequestContext {
        path: req.uri().path(),
        query: req.uri().query(),
        fragment: None,
        is_head: *req.method() == Method::HEAD,
        if_none_match: header_value(&req, "if-none-match"),
        if_modified_since: header_value(&req, "if-modified-since"),
        range_header: header_value(&req, "range"),
    };

    let response = state.spa.handle(&ctx).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            ctx.path.to_string(),
        );
        entry.query = ctx.query.map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes(&response);
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

/// Body size for the access log, taken from Content-Length. Bodyless
/// responses (301, 304) carry no such header and log as zero.
fn body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
