// Action Item Extractor - API Core
//
// HTTP API over the extraction library: notes and action items persisted in
// SQLite, extraction via heuristics with an LLM fallback.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
