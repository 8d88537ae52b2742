//! HTTP adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Serves the single-page search UI and a small JSON API via the
//! Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod templates;

pub use handlers::*;
pub use router::router;
