//! HTTP API: configuration, middleware chain, routing and error translation.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
