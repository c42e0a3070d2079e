//! Content responder module
//!
//! Transfers a resolved file to the client: content type from the file name,
//! conditional requests (`If-None-Match`, `If-Modified-Since`), single byte
//! ranges, and HEAD body suppression. The resolver decides *which* file to
//! serve; this module decides *how* its bytes go out.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use crate::vfs::FileMeta;

/// Serve a resolved file's content.
pub fn serve_content(
    ctx: &RequestContext<'_>,
    meta: &FileMeta,
    content: Vec<u8>,
) -> Response<Full<Bytes>> {
    let content_type = mime::content_type_for_name(&meta.name);
    let etag = cache::generate_etag(&content);
    let last_modified = meta.modified.map(cache::format_http_date);
    let total_size = content.len();

    // Cache validators: ETag wins; Last-Modified is only consulted when the
    // client sent no If-None-Match.
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }
    if ctx.if_none_match.is_none()
        && cache::check_modified_since(ctx.if_modified_since.as_deref(), meta.modified)
    {
        return http::build_304_response(&etag);
    }

    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(content[start..=end].to_vec())
            };

            http::response::build_partial_response(
                body,
                content_type,
                &etag,
                last_modified.as_deref(),
                start,
                end,
                total_size,
                ctx.is_head,
            )
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(total_size),
        RangeParseResult::None => http::response::build_cached_response(
            Bytes::from(content),
            content_type,
            &etag,
            last_modified.as_deref(),
            ctx.is_head,
        ),
    }
}
