//! HTTP session client for one logical portal request.
//!
//! Owns a cookie jar across a bounded sequence of exchanges against one
//! base host. The portal issues a session cookie on first contact and a
//! second, elevated cookie after a successful login; dropping either
//! silently re-renders the login page on every later request, so cookie
//! persistence and redirect-following are both mandatory here. One
//! `SessionClient` per in-flight request — never shared or pooled.

use crate::config::Config;
use crate::error::{PortalError, Result};
use url::Url;

/// Response from a portal page exchange.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Response body as text.
    pub body: String,
    /// Final URL after redirects. Login classification depends on this.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
}

/// Cookie-carrying HTTP client bound to the portal base URL.
pub struct SessionClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SessionClient {
    /// Build a fresh session: empty cookie jar, limited redirects,
    /// browser user agent.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn absolute(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PortalError::Parse(format!("bad portal path {path}: {e}")))
    }

    /// GET a relative path, following redirects and persisting cookies.
    pub async fn get(&self, path: &str) -> Result<PageResponse> {
        let url = self.absolute(path)?;
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Self::read(resp).await
    }

    /// POST url-encoded form fields to a relative path.
    ///
    /// `extra_headers` carries the handshake headers the login endpoint
    /// expects (the echoed verification token, `X-Requested-With`).
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(String, String)],
        extra_headers: &[(String, String)],
    ) -> Result<PageResponse> {
        let url = self.absolute(path)?;
        let mut builder = self.client.post(url);
        for (name, value) in extra_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let resp = builder.form(fields).send().await?.error_for_status()?;
        Self::read(resp).await
    }

    async fn read(resp: reqwest::Response) -> Result<PageResponse> {
        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let body = resp.text().await?;
        Ok(PageResponse {
            body,
            final_url,
            status,
        })
    }
}
