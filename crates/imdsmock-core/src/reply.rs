//! Response spec produced by the responders and executed by the transport.

use bytes::Bytes;

/// Header carrying the token TTL on the IMDSv2 token response.
pub const TOKEN_TTL_HEADER: &str = "X-aws-ec2-metadata-token-ttl-seconds";

/// A fully-shaped response: status, content type, extra headers, body.
///
/// Routing is a pure function `(method, path) -> Reply`; nothing here has
/// touched a socket yet. The transport must emit `Content-Length` equal to
/// [`Reply::content_length`].
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub extra_headers: Vec<(&'static str, String)>,
    pub body: Bytes,
}

impl Reply {
    /// 200 text/plain.
    pub fn text(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            extra_headers: Vec::new(),
            body: body.into(),
        }
    }

    /// 200 application/json.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            extra_headers: Vec::new(),
            body: body.into(),
        }
    }

    /// IMDSv2 token response: the token body plus its TTL header.
    pub fn token(token: &'static str, ttl_seconds: u32) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            extra_headers: vec![(TOKEN_TTL_HEADER, ttl_seconds.to_string())],
            body: Bytes::from_static(token.as_bytes()),
        }
    }

    /// Byte length of the body, for the `Content-Length` header.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
