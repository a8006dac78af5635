//! Sign-in for the admin panel.
//!
//! [`RestAuth`] exchanges an email and password for a session with the
//! hosted project's auth service:
//!
//! ```text
//! POST {url}/auth/v1/token?grant_type=password   { email, password }
//! POST {url}/auth/v1/logout
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use url::Url;

use crate::rest::service_url;
use crate::{AuthError, RestConfig};

const TOKEN_PATH: &str = "auth/v1/token";
const LOGOUT_PATH: &str = "auth/v1/logout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn current_user(&self) -> Option<User>;

    /// Bearer token for store requests made as the signed-in user
    async fn access_token(&self) -> Option<String> {
        None
    }
}

/// Fixed credential table
#[derive(Debug, Clone, Default)]
pub struct MemoryAuth {
    credentials: HashMap<String, String>,
    current: Arc<Mutex<Option<User>>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials.insert(email.into(), password.into());
        self
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self.credentials.get(email) {
            Some(expected) if expected == password => {
                let user = User {
                    id: format!("user-{}", email),
                    email: email.to_string(),
                };
                *self.current.lock().await = Some(user.clone());
                tracing::info!(email, "signed in");
                Ok(user)
            }
            _ => {
                tracing::warn!(email, "rejected sign-in");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.current.lock().await.take();
        Ok(())
    }

    async fn current_user(&self) -> Option<User> {
        self.current.lock().await.clone()
    }

    async fn access_token(&self) -> Option<String> {
        self.current.lock().await.as_ref().map(|user| format!("token-{}", user.id))
    }
}

#[derive(Debug, Clone)]
struct Session {
    user: User,
    access_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: User,
}

/// Password sign-in against the hosted auth service
pub struct RestAuth {
    config: RestConfig,
    token_url: Option<Url>,
    logout_url: Option<Url>,
    client: reqwest::Client,
    session: Arc<Mutex<Option<Session>>>,
}

impl RestAuth {
    pub fn new(config: RestConfig) -> Result<Self, crate::StoreError> {
        let (token_url, logout_url) = if config.is_complete() {
            let mut token = service_url(&config.url, TOKEN_PATH)?;
            token.query_pairs_mut().append_pair("grant_type", "password");
            (Some(token), Some(service_url(&config.url, LOGOUT_PATH)?))
        } else {
            (None, None)
        };

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            token_url,
            logout_url,
            client,
            session: Arc::new(Mutex::new(None)),
        })
    }
}

#[async_trait]
impl AuthProvider for RestAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let url = self.token_url.clone().ok_or(AuthError::NotConfigured)?;

        tracing::debug!(email, "requesting session");
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(email, "rejected sign-in");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Request(format!("auth service returned {}", status.as_u16())));
        }

        let TokenResponse { access_token, user } = response.json().await?;
        tracing::info!(email = %user.email, "signed in");
        *self.session.lock().await = Some(Session {
            user: user.clone(),
            access_token,
        });
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.session.lock().await.take() else {
            return Ok(());
        };
        let Some(url) = self.logout_url.clone() else {
            return Ok(());
        };

        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "sign-out was not acknowledged");
        }
        Ok(())
    }

    async fn current_user(&self) -> Option<User> {
        self.session.lock().await.as_ref().map(|s| s.user.clone())
    }

    async fn access_token(&self) -> Option<String> {
        self.session.lock().await.as_ref().map(|s| s.access_token.clone())
    }
}

/// Who may enter the admin panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessGate {
    /// No store is configured, so there is nothing to protect
    Open,
    Granted(User),
    SignInRequired,
}

impl AccessGate {
    pub fn check(configured: bool, user: Option<&User>) -> Self {
        match (configured, user) {
            (false, _) => AccessGate::Open,
            (true, Some(user)) => AccessGate::Granted(user.clone()),
            (true, None) => AccessGate::SignInRequired,
        }
    }

    pub fn allows(&self) -> bool {
        !matches!(self, AccessGate::SignInRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let auth = MemoryAuth::new().with_user("owner@example.com", "secret");

        assert_eq!(
            auth.sign_in("owner@example.com", "wrong").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(auth.current_user().await, None);

        let user = auth.sign_in("owner@example.com", "secret").await.unwrap();
        assert_eq!(auth.current_user().await, Some(user));
        assert_eq!(
            auth.access_token().await.as_deref(),
            Some("token-user-owner@example.com")
        );

        auth.sign_out().await.unwrap();
        assert_eq!(auth.current_user().await, None);
        assert_eq!(auth.access_token().await, None);
    }

    #[tokio::test]
    async fn test_rest_auth_without_credentials_is_not_configured() {
        let auth = RestAuth::new(RestConfig::new("", "")).unwrap();

        assert_eq!(
            auth.sign_in("owner@example.com", "secret").await,
            Err(AuthError::NotConfigured)
        );
        assert_eq!(auth.current_user().await, None);
        assert_eq!(auth.access_token().await, None);
        assert!(auth.sign_out().await.is_ok());
    }

    #[test]
    fn test_rest_auth_endpoints() {
        let auth = RestAuth::new(RestConfig::new("https://example.supabase.co/", "anon")).unwrap();

        assert_eq!(
            auth.token_url.unwrap().as_str(),
            "https://example.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            auth.logout_url.unwrap().as_str(),
            "https://example.supabase.co/auth/v1/logout"
        );
    }

    #[test]
    fn test_token_response_decodes() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": { "id": "u-1", "email": "owner@example.com", "role": "authenticated" }
        }"#;

        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "jwt");
        assert_eq!(response.user.email, "owner@example.com");
    }

    #[test]
    fn test_gate() {
        let user = User {
            id: "1".to_string(),
            email: "owner@example.com".to_string(),
        };

        assert_eq!(AccessGate::check(false, None), AccessGate::Open);
        assert!(AccessGate::check(false, None).allows());
        assert_eq!(AccessGate::check(true, None), AccessGate::SignInRequired);
        assert!(!AccessGate::check(true, None).allows());
        assert_eq!(AccessGate::check(true, Some(&user)), AccessGate::Granted(user));
    }
}
