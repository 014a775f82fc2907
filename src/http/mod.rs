//! HTTP protocol implementation.
//!
//! A small HTTP/1.1 server with keep-alive connections.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection request/response state machine
//! - **`parser`**: parses requests out of the connection buffer
//! - **`request`**: request representation
//! - **`router`**: maps method and target to a handler
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip
//! - **`response`**: response representation and builder
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer bytes until a full request parses
//!        └──────┬──────┘
//!               │ Request received (malformed → 400, then Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route, negotiate encoding, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Connection: close → Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use courier::http::connection::{Connection, ConnectionSettings};
//! use courier::http::router::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let router = Arc::new(Router::new(None, vec!["gzip".into()]));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = Arc::clone(&router);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router, ConnectionSettings::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
