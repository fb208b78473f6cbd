//! vanityd - vanity import resolution server
//!
//! Resolves "vanity import" discovery requests: given a request path naming
//! a logical module, looks up the configured repository URL and emits an
//! HTML response carrying a `go-import` meta tag that package-fetching
//! clients parse to learn where the module's source actually lives.
//!
//! Two components do the real work:
//!
//! 1. [`registry::Registry`] - immutable-after-load mapping from module
//!    name to repository URL, built once at startup
//! 2. [`http::responder`] - the stateless request rule that gates on the
//!    `go-get=1` discovery flag and renders the meta tag
//!
//! Everything else is plumbing: configuration, logging, signal handling,
//! and the hyper connection loop.

pub mod config;
pub mod http;
pub mod registry;
pub mod utils;

pub use self::config::{LoggingConfig, ServerConfig};
pub use self::http::HttpManager;
pub use self::registry::{ConfigError, Registry};
