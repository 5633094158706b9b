// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON API client

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::cookie::CookieStore;
use super::request::{api_headers, ApiRequest};
use super::response::FetchOutcome;
use crate::auth::{Session, JWT_COOKIE};
use crate::config::ClientConfig;
use crate::error::Result;

/// Path of the token endpoint
pub const TOKEN_PATH: &str = "/api/token";

/// HTTP client for the MovieRama API
///
/// Every call reads the `jwt` cookie from the injected store at call time,
/// so a token written by [`Session::store_token`] is picked up by the next
/// request without any refresh step.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    cookies: Arc<dyn CookieStore>,
}

impl ApiClient {
    /// Create a client with default configuration
    pub fn new(cookies: Arc<dyn CookieStore>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), cookies)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig, cookies: Arc<dyn CookieStore>) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            client,
            config,
            cookies,
        })
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the cookie store
    pub fn cookie_store(&self) -> &Arc<dyn CookieStore> {
        &self.cookies
    }

    /// Token session over the same cookie store
    pub fn session(&self) -> Session {
        Session::new(Arc::clone(&self.cookies))
    }

    /// Build the request `fetch_api` would send
    pub fn build_request(&self, path: &str, method: &str, body: Option<String>) -> Result<ApiRequest> {
        let token = self.cookies.get_cookie(JWT_COOKIE);
        let headers = api_headers(token.as_deref(), self.config.origin.as_deref());

        let mut request = ApiRequest::new(method, self.config.url_for(path))?.headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }
        Ok(request)
    }

    /// Send a request and classify the response
    pub async fn execute(&self, request: ApiRequest) -> Result<FetchOutcome> {
        let start = Instant::now();

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            bearer = request.has_bearer(),
            "sending API request"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if let Some(outcome) = FetchOutcome::from_status(status) {
            tracing::debug!(
                status = status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "API response carries no data"
            );
            return Ok(outcome);
        }

        let body: Bytes = response.bytes().await?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "API response received"
        );

        FetchOutcome::from_parts(status, &body)
    }

    /// Send `method` to `<base_url><path>` and report what came back
    pub async fn fetch_outcome(
        &self,
        path: &str,
        method: &str,
        body: Option<String>,
    ) -> Result<FetchOutcome> {
        let request = self.build_request(path, method, body)?;
        self.execute(request).await
    }

    /// Send `method` to `<base_url><path>`.
    ///
    /// Returns the parsed JSON body for 2xx responses other than 204 and
    /// `None` for 204 or any non-2xx status. Transport failures and
    /// malformed JSON on a successful response are returned as errors.
    ///
    /// `body` is sent as given for every method, GET and HEAD included;
    /// whether such a request is meaningful is left to the caller.
    pub async fn fetch_api(
        &self,
        path: &str,
        method: &str,
        body: Option<String>,
    ) -> Result<Option<Value>> {
        Ok(self.fetch_outcome(path, method, body).await?.into_json())
    }

    /// Like [`fetch_api`](Self::fetch_api), deserializing the body into `T`
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        method: &str,
        body: Option<String>,
    ) -> Result<Option<T>> {
        match self.fetch_api(path, method, body).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Exchange credentials for a token and store it in the `jwt` cookie.
    ///
    /// Returns `false` (leaving the cookie store untouched) when the server
    /// rejects the credentials or answers without an `access` token. As with
    /// [`fetch_api`](Self::fetch_api), a transport failure is `Error::Http`
    /// and a 2xx body that is not JSON is `Error::Serialization`.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        })
        .to_string();

        let access = self
            .fetch_api(TOKEN_PATH, "POST", Some(body))
            .await?
            .and_then(|value| value.get("access").and_then(Value::as_str).map(str::to_string));

        match access {
            Some(token) => {
                self.session().store_token_from_claims(&token);
                tracing::info!(%username, "logged in");
                Ok(true)
            }
            None => {
                tracing::debug!(%username, "login rejected");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::CookieJar;

    fn jar_client(jar: &CookieJar) -> ApiClient {
        ApiClient::new(Arc::new(jar.clone())).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = jar_client(&CookieJar::new());
        assert_eq!(client.config().base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::new().base_url("::nope");
        assert!(ApiClient::with_config(config, Arc::new(CookieJar::new())).is_err());
    }

    #[test]
    fn test_bearer_read_at_call_time() {
        let jar = CookieJar::new();
        let client = jar_client(&jar);

        let req = client.build_request("/api/movies", "GET", None).unwrap();
        assert!(!req.has_bearer());
        assert_eq!(req.url.as_str(), "http://127.0.0.1:8000/api/movies");

        jar.set_session_cookie("jwt", "abc.def.ghi", "/");
        let req = client.build_request("/api/movies", "GET", None).unwrap();
        assert_eq!(req.header_value("authorization"), Some("Bearer abc.def.ghi"));

        client.session().clear();
        let req = client.build_request("/api/movies", "GET", None).unwrap();
        assert!(!req.has_bearer());
    }

    #[test]
    fn test_body_kept_for_get() {
        let client = jar_client(&CookieJar::new());
        let req = client
            .build_request("/api/movies", "get", Some("{\"a\":1}".into()))
            .unwrap();
        assert_eq!(req.method, reqwest::Method::GET);
        assert_eq!(req.body.as_deref(), Some(&b"{\"a\":1}"[..]));
    }

    #[test]
    fn test_empty_jwt_cookie_sends_no_bearer() {
        let jar = CookieJar::parse("jwt=; other=1");
        let req = jar_client(&jar).build_request("/", "GET", None).unwrap();
        assert!(!req.has_bearer());
    }
}
