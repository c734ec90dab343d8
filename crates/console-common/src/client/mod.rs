//! Typed HTTP clients for the panchayat API.
//!
//! [`PublicClient`] serves the sign-in and sign-up endpoints.
//! [`AuthenticatedClient`] reads the token from the session store on every
//! request, so a sign-out or an expiry takes effect without rebuilding it.

mod body;
mod error;

pub use body::{RequestBody, Upload};
pub use error::ClientError;

use crate::auth::notify_unauthorized;
use crate::config::ApiConfig;
use crate::session::SessionStore;
use reqwest::{header, Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

const USER_AGENT: &str = concat!("panchayat-console/", env!("CARGO_PKG_VERSION"));

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for endpoints that need no token
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client that sends the stored bearer token
#[derive(Clone)]
pub struct AuthenticatedClient {
    public: PublicClient,
    session: SessionStore,
}

impl PublicClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("empty API base URL".into()));
        }

        // The browser owns request timeouts; natively we bound them ourselves
        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Send and decode a JSON response
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        read_json(response).await
    }

    /// Send and ignore any success body
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        check_status(response).await.map(drop)
    }

    /// Bind to a session store to get an authenticated client
    pub fn authenticate(self, session: SessionStore) -> AuthenticatedClient {
        AuthenticatedClient {
            public: self,
            session,
        }
    }
}

impl AuthenticatedClient {
    /// Create a request carrying the current token.
    ///
    /// Fails with [`ClientError::NotAuthenticated`] when the store holds no
    /// token, before anything touches the network.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let token = self.session.token().ok_or(ClientError::NotAuthenticated)?;
        Ok(self
            .public
            .request(method, path)
            .header(header::AUTHORIZATION, format!("Bearer {token}")))
    }

    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let result = match request.send().await {
            Ok(response) => read_json(response).await,
            Err(error) => Err(error.into()),
        };
        self.observe(result)
    }

    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        let result = match request.send().await {
            Ok(response) => check_status(response).await.map(drop),
            Err(error) => Err(error.into()),
        };
        self.observe(result)
    }

    /// Build, attach the payload, send, and ignore the success body
    pub async fn send(&self, method: Method, path: &str, body: RequestBody) -> Result<(), ClientError> {
        let request = body.attach(self.request(method, path)?)?;
        self.execute_empty(request).await
    }

    /// Build, send without a body, and decode the response
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    fn observe<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(ClientError::AuthenticationFailed(message)) = &result {
            tracing::warn!(%message, "token rejected by the server");
            notify_unauthorized();
        }
        result
    }
}

impl PartialEq for PublicClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl PartialEq for AuthenticatedClient {
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public && self.session == other.session
    }
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.public.base_url)
            .finish_non_exhaustive()
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = check_status(response).await?.bytes().await?;
    // Some endpoints answer 200 with no body at all
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Builds either client type against the configured API root
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self.base_url.unwrap_or_else(ApiConfig::base_url);
        PublicClient::new(base_url)
    }

    pub fn build_authenticated(self, session: SessionStore) -> Result<AuthenticatedClient, ClientError> {
        Ok(self.build_public()?.authenticate(session))
    }
}
