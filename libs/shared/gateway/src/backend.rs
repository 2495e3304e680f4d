use std::sync::Arc;

use anyhow::{Result, anyhow};
use reqwest::{
    Client, Method, Response, Url,
    cookie::{CookieStore, Jar},
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::PortalConfig;

/// Cookie the backend issues its anti-forgery token under.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header state-changing requests must echo the token back in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the clinic backend. All calls share one cookie jar, so
/// session cookies set by the server ride along on every request and the
/// anti-forgery token can be read back out of the jar for mutating calls.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    jar: Arc<Jar>,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            client,
            jar,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self, method: &Method) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if *method != Method::GET {
            if let Some(token) = self.csrf_token() {
                if let Ok(value) = HeaderValue::from_str(&token) {
                    headers.insert(CSRF_HEADER, value);
                }
            }
        }

        headers
    }

    /// Read the anti-forgery token out of the session's cookie jar.
    pub fn csrf_token(&self) -> Option<String> {
        let url = Url::parse(&self.base_url).ok()?;
        let cookies = self.jar.cookies(&url)?;
        let cookies = cookies.to_str().ok()?;

        let prefix = format!("{}=", CSRF_COOKIE);
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .map(str::to_string)
    }

    /// Perform a request and hand back the raw response. Callers that need
    /// to inspect failure payloads (the booking flow does) go through this.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let headers = self.get_headers(&method);

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        Ok(req.send().await?)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}
