use super::{Method, Request, Transport, API_BASE_URL};
use crate::error::{CocorahsError, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

const USER_AGENT: &str = concat!("cocorahs-rs/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTPS transport for the CoCoRaHS API.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Transport rooted at another base URL. A trailing slash is added so
    /// relative paths extend the base instead of replacing its last segment.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| CocorahsError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CocorahsError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<Value> {
        let url = self.url_for(&request.path)?;
        debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url).form(&request.form),
        };
        if let Some(auth) = &request.auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned HTTP {}", request.method, request.path, status);
        }

        let body = response.text()?;
        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.path,
            status,
            body.len()
        );
        Ok(serde_json::from_str(&body)?)
    }
}
