//! Request handler module
//!
//! Resolution of request paths to static assets with SPA fallback, and the
//! content transfer that follows.

pub mod responder;
pub mod router;
pub mod spa;

// Re-export main entry points
pub use router::{handle_request, RequestContext};
pub use spa::{SpaHandler, SpaOptions};
