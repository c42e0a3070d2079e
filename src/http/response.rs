//! HTTP response building module
//!
//! Builders for the response shapes the resolver and content responder emit.
//! A builder failure degrades to an empty response rather than a panic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 301 Moved Permanently response with an empty body.
pub fn build_301_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 304 Not Modified response.
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 416 Range Not Satisfiable response.
pub fn build_416_response(file_size: usize) -> Response<Full<Bytes>> {
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Range", format!("bytes */{file_size}"))
        .body(Full::new(Bytes::from("Range Not Satisfiable")))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(Full::new(Bytes::from("Range Not Satisfiable")))
        })
}

/// Build a 500 Internal Server Error response.
///
/// The body is a fixed status line; failure details stay in the server log.
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build a 200 response with cache validators.
pub fn build_cached_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    last_modified: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600");

    if let Some(modified) = last_modified {
        builder = builder.header("Last-Modified", modified);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build a 206 Partial Content response.
#[allow(clippy::too_many_arguments)]
pub fn build_partial_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    last_modified: Option<&str>,
    start: usize,
    end: usize,
    total_size: usize,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = end - start + 1;
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Content-Range", format!("bytes {start}-{end}/{total_size}"))
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600");

    if let Some(modified) = last_modified {
        builder = builder.header("Last-Modified", modified);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("206", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_301_is_empty_with_location() {
        let resp = build_301_response("./?query#fragment");
        assert_eq!(resp.status(), 301);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "./?query#fragment"
        );
    }

    #[test]
    fn test_500_is_generic() {
        let resp = build_500_response();
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/plain");
    }

    #[test]
    fn test_cached_response_headers() {
        let resp = build_cached_response(
            Bytes::from_static(b"body"),
            "text/css",
            "\"tag\"",
            Some("Wed, 21 Oct 2015 07:28:00 GMT"),
            false,
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css");
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "4");
        assert_eq!(resp.headers().get("ETag").unwrap(), "\"tag\"");
        assert_eq!(
            resp.headers().get("Last-Modified").unwrap(),
            "Wed, 21 Oct 2015 07:28:00 GMT"
        );
    }

    #[test]
    fn test_partial_response_content_range() {
        let resp = build_partial_response(
            Bytes::from_static(b"cde"),
            "text/plain",
            "\"tag\"",
            None,
            2,
            4,
            10,
            false,
        );
        assert_eq!(resp.status(), 206);
        assert_eq!(
            resp.headers().get("Content-Range").unwrap(),
            "bytes 2-4/10"
        );
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "3");
    }
}
