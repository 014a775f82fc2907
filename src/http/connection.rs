use std::sync::Arc;
use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::config::ServerConfig;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Router;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 4096;

/// Per-connection limits, derived from [`ServerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    pub max_request_bytes: usize,
    pub read_timeout: Option<Duration>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}

impl ConnectionSettings {
    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self {
            max_request_bytes: cfg.max_request_bytes,
            read_timeout: cfg.read_timeout(),
        }
    }
}

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    router: Arc<Router>,
    settings: ConnectionSettings,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

enum Inbound {
    Request(Request),
    Malformed(ParseError),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, settings: ConnectionSettings) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
            router,
            settings,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Inbound::Request(req) => ConnectionState::Processing(req),
                        Inbound::Malformed(e) => {
                            tracing::warn!(error = %e, "Rejecting malformed request");
                            let writer = ResponseWriter::new(&Response::bad_request());
                            ConnectionState::Writing(writer, false)
                        }
                        Inbound::Closed => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let keep_alive = req.keep_alive();
                    let response = self.router.route(&req).await;

                    tracing::debug!(
                        method = ?req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        keep_alive,
                        "Request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(mut writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        if let Err(e) = self.stream.shutdown().await {
                            tracing::debug!(error = %e, "Shutdown after close failed");
                        }
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Inbound> {
        loop {
            // Try parsing whatever we already have
            if !self.buffer.is_empty() {
                match parse_http_request(&self.buffer) {
                    Ok((request, consumed)) => {
                        self.buffer.advance(consumed);
                        return Ok(Inbound::Request(request));
                    }

                    Err(ParseError::Incomplete) => {
                        // Need more data → fall through to read
                    }

                    Err(e) => return Ok(Inbound::Malformed(e)),
                }
            }

            if self.buffer.len() >= self.settings.max_request_bytes {
                return Ok(Inbound::Malformed(ParseError::TooLarge));
            }

            // Read more data
            self.buffer.reserve(READ_CHUNK);
            let read = self.stream.read_buf(&mut self.buffer);
            let n = match self.settings.read_timeout {
                Some(limit) => match timeout(limit, read).await {
                    Ok(n) => n?,
                    Err(_) => {
                        tracing::debug!(?limit, "Read timed out, closing connection");
                        return Ok(Inbound::Closed);
                    }
                },
                None => read.await?,
            };

            if n == 0 {
                // Client closed connection
                return Ok(Inbound::Closed);
            }
        }
    }
}
