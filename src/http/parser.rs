use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed request line")]
    InvalidRequest,
    #[error("header line without \": \" separator")]
    InvalidHeader,
    #[error("Content-Length is not a number")]
    InvalidContentLength,
    #[error("request exceeds the size limit")]
    TooLarge,
    #[error("request is incomplete")]
    Incomplete,
}

/// Parses one request from the front of `buf`.
///
/// On success returns the request together with the number of bytes it
/// occupied, so that anything after it can be kept for the next request.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: exactly three single-space separated tokens
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method_str, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequest);
    };
    if method_str.is_empty() || !path.starts_with('/') || version.is_empty() {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::from_token(method_str);

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        let (key, value) = line.split_once(": ").ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.to_string(), value.to_string());
    }

    // Body
    let content_length = headers
        .get("Content-Length")
        .map(|v| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)
        })
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
