//! # Transport Layer
//!
//! The [`Transport`] trait is the seam between the API client and the network.
//! The client describes each call as a [`Request`]; the transport performs it
//! and hands back the decoded JSON body.
//!
//! ## Implementations
//!
//! - [`http::HttpTransport`]: blocking HTTPS client used in production.
//! - [`memory::MemoryTransport`]: records requests and replays canned bodies,
//!   for tests. Compiled only under `cfg(test)` or the `test_utils` feature.
//!
//! Transports do not interpret HTTP status codes. The CoCoRaHS API reports
//! application errors in the body, so callers inspect the decoded value.

use crate::error::Result;
use crate::model::Credentials;
use serde_json::Value;
use std::fmt;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

/// Root every request path is resolved against.
pub const API_BASE_URL: &str = "https://api2.cocorahs.org/api/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A single API call, relative to [`API_BASE_URL`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    /// Form-encoded body fields, in order.
    pub form: Vec<(String, String)>,
    /// Basic-auth credentials. `None` until the client or caller sets them.
    pub auth: Option<Credentials>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            form: Vec::new(),
            auth: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = form;
        self
    }

    pub fn with_auth(mut self, auth: Credentials) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Value of a form field, if present.
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Performs requests and decodes JSON responses.
pub trait Transport {
    fn send(&self, request: &Request) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &Request) -> Result<Value> {
        (**self).send(request)
    }
}
