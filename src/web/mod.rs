//! JSON API for generating graphs and querying shortest paths over HTTP

pub mod api;
pub mod models;
pub mod server;

pub use server::{build_app, start_server, start_server_with_config, ServerConfig};
