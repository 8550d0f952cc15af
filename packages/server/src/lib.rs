// NOTL Event Importer - API Core
//
// Backend for the event import workflow: a URL is turned into a structured
// event record by the external scraping helper, reviewed in the web frontend,
// and published as a WordPress post.

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
