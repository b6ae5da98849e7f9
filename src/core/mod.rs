//! HTTP surface over the readiness engine

pub mod http;

pub use http::*;
