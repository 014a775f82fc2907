use crate::http::encoding::{self, EncodingDecision};

pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Unknown route or missing file
/// - `InternalServerError` (500): File could not be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A response ready to be serialized.
///
/// `headers` keeps insertion order and `body` holds the bytes as they go on
/// the wire, i.e. after any content encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Ordered header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Response body as transmitted
    pub body: Vec<u8>,
}

/// Builder for responses that may carry encoded content.
///
/// # Example
///
/// ```
/// # use courier::http::encoding::EncodingDecision;
/// # use courier::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content("text/plain", b"abc".to_vec())
///     .encoding(EncodingDecision::identity())
///     .build();
///
/// assert_eq!(response.header("Content-Length"), Some("3"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content: Option<(String, Vec<u8>)>,
    encoding: EncodingDecision,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
            encoding: EncodingDecision::identity(),
        }
    }

    /// Sets the unencoded body and its content type.
    pub fn content(mut self, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.content = Some((content_type.into(), body.into()));
        self
    }

    pub fn encoding(mut self, decision: EncodingDecision) -> Self {
        self.encoding = decision;
        self
    }

    /// Builds the final Response.
    ///
    /// With content, emits Content-Type, Content-Length and (when encoding was
    /// applied) Content-Encoding, in that order. A failed compression falls
    /// back to the raw body. Without content the response has no headers.
    pub fn build(self) -> Response {
        let Some((content_type, raw)) = self.content else {
            return Response::empty(self.status);
        };

        let (body, applied) = if self.encoding.applied {
            match encoding::compress(&self.encoding.algorithm, &raw) {
                Ok(compressed) => (compressed, Some(self.encoding.algorithm)),
                Err(e) => {
                    tracing::warn!(
                        algorithm = %self.encoding.algorithm,
                        error = %e,
                        "Compression failed, sending body unencoded"
                    );
                    (raw, None)
                }
            }
        } else {
            (raw, None)
        };

        let mut headers = vec![
            ("Content-Type".to_string(), content_type),
            ("Content-Length".to_string(), body.len().to_string()),
        ];
        if let Some(algorithm) = applied {
            headers.push(("Content-Encoding".to_string(), algorithm));
        }

        Response {
            status: self.status,
            headers,
            body,
        }
    }
}

impl Response {
    /// A response with a status line only: no headers, no body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn ok() -> Self {
        Self::empty(StatusCode::Ok)
    }

    pub fn created() -> Self {
        Self::empty(StatusCode::Created)
    }

    pub fn bad_request() -> Self {
        Self::empty(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    pub fn internal_error() -> Self {
        Self::empty(StatusCode::InternalServerError)
    }

    /// Looks up the first header with this exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
