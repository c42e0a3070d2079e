//! SPA static asset server.
//!
//! Serves a static file tree over HTTP and answers every path that does not
//! resolve to a real file with a configured fallback document, so
//! client-side-routed applications always receive their entry document.
//! Canonical `.../index.html` requests are redirected to their directory
//! form.
//!
//! The resolution core ([`handler::SpaHandler`]) is generic over a virtual
//! filesystem ([`vfs::FileSystem`]), so assets can come from an OS directory
//! ([`vfs::DiskFs`]) or an in-memory tree ([`vfs::MemoryFs`]).

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod vfs;
