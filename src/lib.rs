//! Courier - minimal HTTP/1.1 request/response engine
//!
//! Parses requests, routes them to a handful of handlers (echo, user-agent,
//! file read/write), negotiates gzip encoding and serializes the response.

pub mod config;
pub mod http;
pub mod server;
pub mod storage;
