//! HTTP transport to the question-answering service.
//!
//! Implements the `AskClient` trait with reqwest: one JSON POST per
//! question, the tenant qualifier as a query parameter, and bounded
//! connect and request timeouts.

mod api;
mod config;
mod http;

pub use config::ClientConfig;
pub use http::HttpAskClient;
