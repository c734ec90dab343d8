//! Sign-in, sign-up and sign-out against the auth endpoints

use crate::client::{ClientError, PublicClient};
use crate::clock::{Clock, SystemClock};
use crate::config::SessionConfig;
use crate::resources::ValidationError;
use crate::session::{Session, SessionStore};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(default)]
    token: String,
    /// Seconds
    #[serde(default)]
    expires_in: Option<i64>,
}

fn require(value: &str, field: &'static str, label: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field, label });
    }
    Ok(())
}

/// The only writer of a fresh session
#[derive(Clone)]
pub struct AuthService<C = SystemClock> {
    client: PublicClient,
    store: SessionStore,
    clock: C,
}

impl AuthService<SystemClock> {
    pub const fn new(client: PublicClient, store: SessionStore) -> Self {
        Self::with_clock(client, store, SystemClock)
    }
}

impl<C: Clock> AuthService<C> {
    pub const fn with_clock(client: PublicClient, store: SessionStore, clock: C) -> Self {
        Self {
            client,
            store,
            clock,
        }
    }

    /// Exchange credentials for a token and persist it with its expiry
    pub async fn sign_in(&self, credentials: &SignIn) -> Result<Session, ClientError> {
        require(&credentials.email, "email", "Email")?;
        require(&credentials.password, "password", "Password")?;

        let request = self
            .client
            .request(Method::POST, "/auth/login")
            .json(credentials);
        let response: LoginResponse = self.client.execute(request).await?;
        if response.token.is_empty() {
            return Err(ClientError::AuthenticationFailed(
                "sign-in response carried no token".into(),
            ));
        }

        let lifetime_secs = response
            .expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(SessionConfig::DEFAULT_LIFETIME_SECS);
        let expiry = self
            .clock
            .now_ms()
            .saturating_add(lifetime_secs.saturating_mul(1_000));

        self.store.write(&response.token, expiry);
        tracing::info!(lifetime_secs, "signed in");
        Ok(Session {
            token: response.token,
            expiry,
        })
    }

    /// Create an account; the user signs in separately afterwards
    pub async fn sign_up(&self, account: &SignUp) -> Result<(), ClientError> {
        require(&account.name, "name", "Name")?;
        require(&account.email, "email", "Email")?;
        require(&account.password, "password", "Password")?;

        let request = self
            .client
            .request(Method::POST, "/auth/register")
            .json(account);
        self.client.execute_empty(request).await?;
        tracing::info!("account registered");
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.clear();
        tracing::info!("signed out");
    }
}
