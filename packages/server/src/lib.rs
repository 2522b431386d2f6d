// Learning Resources Hub - API Core
//
// Serves a read-only catalog of learning resources grouped by topic. The
// catalog is loaded once from a JSON document at startup and exposed through
// a small JSON API plus a single embedded HTML page.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
