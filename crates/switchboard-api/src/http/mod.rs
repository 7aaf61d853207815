//! HTTP handlers for the proxy.

pub mod envelope;
pub mod monitoring;
pub mod proxy;
pub mod routes;
