pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod server;
pub mod static_site;
pub mod types;
pub mod web;
