//! The `tarefas-api` library crate.
//!
//! Contains the domain models, the authentication gate (token service,
//! middleware, extractor, password digests), routing configuration, and error
//! handling for the API. The binary (`main.rs`) uses it to assemble and run
//! the server; the integration tests use it to assemble the same app in
//! memory.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
