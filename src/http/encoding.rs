//! Response content-encoding negotiation and gzip compression.

use std::collections::HashMap;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

pub const GZIP: &str = "gzip";

/// Outcome of negotiating a response encoding with the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingDecision {
    pub applied: bool,
    /// Empty unless `applied`.
    pub algorithm: String,
}

impl EncodingDecision {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn apply(algorithm: impl Into<String>) -> Self {
        Self {
            applied: true,
            algorithm: algorithm.into(),
        }
    }
}

/// Picks the first algorithm in `supported` (server order) that the client
/// lists anywhere in `Accept-Encoding`.
///
/// The client's own ordering is ignored. Tokens are compared exactly after
/// collapsing `", "` to `","`.
pub fn negotiate<S: AsRef<str>>(
    headers: &HashMap<String, String>,
    supported: &[S],
) -> EncodingDecision {
    let Some(accept) = headers.get("Accept-Encoding") else {
        return EncodingDecision::identity();
    };

    let normalized = accept.replace(", ", ",");
    let offered: Vec<&str> = normalized.split(',').collect();

    supported
        .iter()
        .map(|s| s.as_ref())
        .find(|algorithm| offered.contains(algorithm))
        .map(EncodingDecision::apply)
        .unwrap_or_default()
}

/// Encodes `content` with `algorithm`. Only gzip is implemented.
pub fn compress(algorithm: &str, content: &[u8]) -> std::io::Result<Vec<u8>> {
    match algorithm {
        GZIP => gzip(content),
        other => Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            format!("unsupported content encoding: {other}"),
        )),
    }
}

fn gzip(content: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    encoder.finish()
}
