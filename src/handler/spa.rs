//! SPA resolution module
//!
//! The per-request decision core: serve the requested file, redirect a
//! canonical index request to its directory form, serve the fallback
//! document, or fail with a generic server error. Client-side-routed
//! applications get their entry document back for any path that does not
//! name a real file.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::borrow::Cow;

use crate::handler::responder;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::vfs::{path, FileHandle, FileMeta, FileSystem, FsError};

/// Resolution options, fixed at construction.
#[derive(Debug, Clone)]
pub struct SpaOptions {
    /// Rooted path of the document served when a request does not resolve to
    /// a regular file. An empty string disables the fallback entirely.
    pub fallback_path: String,
    /// Redirect `.../index.html` requests to their directory form.
    pub index_redirect: bool,
}

impl Default for SpaOptions {
    fn default() -> Self {
        Self {
            fallback_path: "/index.html".to_string(),
            index_redirect: true,
        }
    }
}

/// Static asset handler with fallback resolution.
///
/// Stateless per request: the filesystem and options are read-only after
/// construction, so one handler instance serves any number of concurrent
/// requests without synchronization.
#[derive(Debug)]
pub struct SpaHandler<F> {
    fs: F,
    options: SpaOptions,
}

impl<F: FileSystem> SpaHandler<F> {
    /// Handler with default options over `fs`.
    pub fn new(fs: F) -> Self {
        Self::with_options(fs, SpaOptions::default())
    }

    pub const fn with_options(fs: F, options: SpaOptions) -> Self {
        Self { fs, options }
    }

    /// Resolve one request to exactly one terminal response: a 301 index
    /// redirect, responder-served content, or a generic 500.
    pub async fn handle(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        let fpath = ensure_rooted(ctx.path);

        // Canonical index requests redirect to their directory form before
        // any filesystem access.
        if self.options.index_redirect && fpath.ends_with("/index.html") {
            return http::build_301_response(&redirect_target(ctx));
        }

        // Directory-style requests (other than root) never hit the
        // filesystem: no directory listing, straight to the fallback.
        if fpath != "/" && fpath.ends_with('/') {
            return self.recover(ctx, &FsError::NotFound).await;
        }

        match self.open_regular(&path::clean(&fpath)).await {
            Ok((meta, content)) => responder::serve_content(ctx, &meta, content),
            Err(err) => self.recover(ctx, &err).await,
        }
    }

    /// Open `rooted`, stat it and read its content. Non-regular entries
    /// (directories, sockets...) report the same error as a missing file.
    /// The handle is released when this returns, on success and failure.
    async fn open_regular(&self, rooted: &str) -> Result<(FileMeta, Vec<u8>), FsError> {
        let mut file: Box<dyn FileHandle> = self.fs.open(rooted).await?;
        let meta = file.stat().await?;

        if !meta.is_regular {
            return Err(FsError::NotFound);
        }

        let content = file.read_all().await?;
        Ok((meta, content))
    }

    /// Recover from a lookup failure by serving the fallback document.
    ///
    /// Only missing or unreadable entries are recoverable; genuine I/O
    /// failures surface as server errors so infrastructure problems are not
    /// masked as soft fallbacks. A broken fallback is an operator mistake
    /// and also surfaces as a server error; there is no second fallback.
    async fn recover(&self, ctx: &RequestContext<'_>, err: &FsError) -> Response<Full<Bytes>> {
        if self.options.fallback_path.is_empty() || !err.is_fallback_eligible() {
            if let FsError::Io(io_err) = err {
                logger::log_error(&format!("Lookup failed for '{}': {io_err}", ctx.path));
            }
            return http::build_500_response();
        }

        match self.open_regular(&self.options.fallback_path).await {
            Ok((meta, content)) => responder::serve_content(ctx, &meta, content),
            Err(fallback_err) => {
                logger::log_error(&format!(
                    "Fallback document '{}' unavailable: {fallback_err}",
                    self.options.fallback_path
                ));
                http::build_500_response()
            }
        }
    }
}

/// Ensure the request path is absolute-form. No other transformation here;
/// lexical cleaning happens only for filesystem lookups, so the redirect
/// check sees the path as the client sent it.
fn ensure_rooted(fpath: &str) -> Cow<'_, str> {
    if fpath.starts_with('/') {
        Cow::Borrowed(fpath)
    } else {
        Cow::Owned(format!("/{fpath}"))
    }
}

/// Destination of an index redirect: `./` keeping query and fragment.
fn redirect_target(ctx: &RequestContext<'_>) -> String {
    let mut target = String::from("./");

    if let Some(query) = ctx.query {
        if !query.is_empty() {
            target.push('?');
            target.push_str(query);
        }
    }

    if let Some(fragment) = ctx.fragment {
        if !fragment.is_empty() {
            target.push('#');
            target.push_str(fragment);
        }
    }

    target
}
