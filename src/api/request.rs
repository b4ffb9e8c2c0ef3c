//! Boundary request and reply types
//!
//! The embedding HTTP layer parses the wire request into a [`Request`] and
//! writes the [`Reply`] back out; neither type knows about sockets.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Request methods the boundary routes on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
    Other,
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            _ => Method::Other,
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Patch => write!(f, "PATCH"),
            Method::Delete => write!(f, "DELETE"),
            Method::Other => write!(f, "OTHER"),
        }
    }
}

/// A parsed request
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Path without query string, e.g. `/write/post`
    pub path: String,
    /// Decoded query parameters
    pub params: HashMap<String, String>,
    /// Raw request body, if any
    pub body: Option<String>,
}

impl Request {
    /// Create a request with no parameters or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
            body: None,
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// A parameter that must be present and non-empty
    pub(crate) fn required(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The path segment after `prefix`, e.g. `post` for `/write/post`
    pub(crate) fn tail(&self, prefix: &str) -> Option<&str> {
        self.path
            .strip_prefix(prefix)?
            .strip_prefix('/')
            .filter(|rest| !rest.is_empty())
    }
}

/// Status and body sent back to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn created(body: impl Into<String>) -> Self {
        Self::new(201, body)
    }

    pub fn bad_request(body: impl Into<String>) -> Self {
        Self::new(400, body)
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    /// Whether the status signals a failure
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!("PUT".parse::<Method>().unwrap(), Method::Other);
    }

    #[test]
    fn test_required_rejects_empty() {
        let req = Request::new(Method::Get, "/get").param("file", "").param("key", "k");
        assert_eq!(req.required("file"), None);
        assert_eq!(req.required("key"), Some("k"));
        assert_eq!(req.required("missing"), None);
    }

    #[test]
    fn test_tail() {
        let req = Request::new(Method::Post, "/write/post.json");
        assert_eq!(req.tail("/write"), Some("post.json"));
        assert_eq!(req.tail("/delete"), None);

        assert_eq!(Request::new(Method::Post, "/write/").tail("/write"), None);
        assert_eq!(Request::new(Method::Post, "/write").tail("/write"), None);
        assert_eq!(Request::new(Method::Post, "/writer/x").tail("/write"), None);
    }
}
