//! Maps (method, target) to a handler.
//!
//! | Method | Target          | Handler            |
//! |--------|-----------------|--------------------|
//! | GET    | `/`             | empty 200          |
//! | GET    | `/echo/<text>`  | echo `<text>`      |
//! | GET    | `/user-agent`   | echo `User-Agent`  |
//! | GET    | `/files/<name>` | read file          |
//! | POST   | `/files/<name>` | write file         |
//!
//! Everything else is 404 Not Found. Prefixes are stripped literally; the
//! remainder is passed on undecoded.

use crate::config::Config;
use crate::http::encoding::{self, EncodingDecision};
use crate::http::request::{Method, Request};
use crate::http::response::{OCTET_STREAM, Response, ResponseBuilder, StatusCode, TEXT_PLAIN};
use crate::storage::{FileStore, FileStoreError};

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";
const USER_AGENT_PATH: &str = "/user-agent";

/// Request dispatcher shared read-only by every connection.
#[derive(Debug, Clone)]
pub struct Router {
    files: Option<FileStore>,
    supported_encodings: Vec<String>,
}

impl Router {
    pub fn new(files: Option<FileStore>, supported_encodings: Vec<String>) -> Self {
        Self {
            files,
            supported_encodings,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.files.directory.clone().map(FileStore::new),
            cfg.server.supported_encodings.clone(),
        )
    }

    pub async fn route(&self, req: &Request) -> Response {
        let path = req.path.as_str();

        match req.method {
            Method::GET if path == "/" => Response::ok(),
            Method::GET if path == USER_AGENT_PATH => {
                let agent = req.header("User-Agent").unwrap_or_default();
                self.content(req, TEXT_PLAIN, agent.as_bytes().to_vec())
            }
            Method::GET => {
                if let Some(text) = path.strip_prefix(ECHO_PREFIX) {
                    self.content(req, TEXT_PLAIN, text.as_bytes().to_vec())
                } else if let Some(name) = path.strip_prefix(FILES_PREFIX) {
                    self.read_file(req, name).await
                } else {
                    Response::not_found()
                }
            }
            Method::POST => match path.strip_prefix(FILES_PREFIX) {
                Some(name) => self.write_file(req, name).await,
                None => Response::not_found(),
            },
            _ => Response::not_found(),
        }
    }

    fn negotiate(&self, req: &Request) -> EncodingDecision {
        encoding::negotiate(&req.headers, &self.supported_encodings)
    }

    fn content(&self, req: &Request, content_type: &str, body: Vec<u8>) -> Response {
        ResponseBuilder::new(StatusCode::Ok)
            .content(content_type, body)
            .encoding(self.negotiate(req))
            .build()
    }

    async fn read_file(&self, req: &Request, name: &str) -> Response {
        let Some(store) = &self.files else {
            return Response::not_found();
        };

        match store.read(name).await {
            Ok(contents) => self.content(req, OCTET_STREAM, contents),
            Err(e) => {
                tracing::warn!(error = %e, "File read failed");
                Response::not_found()
            }
        }
    }

    async fn write_file(&self, req: &Request, name: &str) -> Response {
        let Some(store) = &self.files else {
            return Response::not_found();
        };

        match store.write(name, &req.body).await {
            Ok(()) => {
                tracing::debug!(name, bytes = req.body.len(), "File written");
                Response::created()
            }
            Err(e @ FileStoreError::InvalidName(_)) => {
                tracing::warn!(error = %e, "Refusing file write");
                Response::not_found()
            }
            Err(e) => {
                tracing::error!(error = %e, "File write failed");
                Response::internal_error()
            }
        }
    }
}
