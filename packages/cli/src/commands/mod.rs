pub mod apply;
pub mod diff;
pub mod sections;
pub mod show;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use diff::{diff, DiffArgs};
pub use sections::sections;
pub use show::{show, ShowArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::{AuthConfig, Config, ADMIN_EMAIL_ENV, ADMIN_PASSWORD_ENV};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use sitekit_content::{SectionContent, SectionKey};
use sitekit_store::{
    AccessGate, AuthProvider, ContentStore, MemoryStore, RestAuth, RestStore, UnconfiguredStore,
};
use sitekit_validator::ErrorDisplay;
use std::path::Path;

/// Pick the backend for this run
pub(crate) fn open_store(config: &Config, memory: bool) -> Result<Box<dyn ContentStore>> {
    if memory {
        tracing::info!("using in-memory store, nothing will be published");
        return Ok(Box::new(MemoryStore::new()));
    }

    let rest = config.rest_config();
    if !rest.is_complete() {
        tracing::warn!("store credentials missing, using built-in content");
        return Ok(Box::new(UnconfiguredStore));
    }

    Ok(Box::new(RestStore::new(rest)?))
}

/// Pick the backend for a run that publishes.
///
/// A configured store is only written after signing in with the admin
/// account, and writes carry that session's token.
pub(crate) async fn open_publishing_store(config: &Config, memory: bool) -> Result<Box<dyn ContentStore>> {
    let rest = config.rest_config();
    if memory || !rest.is_complete() {
        return open_store(config, memory);
    }

    let auth = RestAuth::new(rest.clone())?;
    let mut store = RestStore::new(rest)?;
    if let Some(token) = authorize(&auth, store.is_configured(), &config.auth).await? {
        store = store.with_access_token(token);
    }
    Ok(Box::new(store))
}

/// Sign in if the store needs it. Returns the token to write with.
pub(crate) async fn authorize<A: AuthProvider>(
    auth: &A,
    configured: bool,
    credentials: &AuthConfig,
) -> Result<Option<String>> {
    let user = if configured && credentials.is_complete() {
        Some(auth.sign_in(&credentials.email, &credentials.password).await?)
    } else {
        auth.current_user().await
    };

    match AccessGate::check(configured, user.as_ref()) {
        AccessGate::Open => Ok(None),
        AccessGate::Granted(user) => {
            tracing::info!(email = %user.email, "publishing as signed-in user");
            Ok(auth.access_token().await)
        }
        AccessGate::SignInRequired => Err(anyhow!(
            "Sign in required: set {} and {}",
            ADMIN_EMAIL_ENV,
            ADMIN_PASSWORD_ENV
        )),
    }
}

/// Read a JSON value from disk
pub(crate) fn read_json(path: &Path) -> Result<serde_json::Value> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Read a section document from disk
pub(crate) fn read_section(key: SectionKey, path: &Path) -> Result<SectionContent> {
    let value = read_json(path)?;
    Ok(SectionContent::from_value(key, value)?)
}

pub(crate) fn print_errors(display: &ErrorDisplay) {
    println!("{}", "Please fix the following errors:".red().bold());
    for message in &display.messages {
        println!("   {} {}", "✗".red(), message);
    }
    if let Some(line) = display.overflow_line() {
        println!("   {}", line.dimmed());
    }
}

pub(crate) fn print_changes(changes: &[String]) {
    if changes.is_empty() {
        println!("{}", "No changes".dimmed());
        return;
    }
    for change in changes {
        println!("   {} {}", "•".bright_blue(), change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_store::{AuthError, MemoryAuth};

    fn owner(password: &str) -> AuthConfig {
        AuthConfig {
            email: "owner@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_store_needs_no_sign_in() {
        let auth = MemoryAuth::new();
        assert_eq!(authorize(&auth, false, &AuthConfig::default()).await.unwrap(), None);
        assert_eq!(auth.current_user().await, None);
    }

    #[tokio::test]
    async fn test_configured_store_requires_credentials() {
        let auth = MemoryAuth::new().with_user("owner@example.com", "secret");

        let err = authorize(&auth, true, &AuthConfig::default()).await.unwrap_err();
        assert!(err.to_string().starts_with("Sign in required"));

        let err = authorize(&auth, true, &owner("wrong")).await.unwrap_err();
        assert_eq!(err.downcast_ref::<AuthError>(), Some(&AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_signed_in_token_is_returned() {
        let auth = MemoryAuth::new().with_user("owner@example.com", "secret");

        let token = authorize(&auth, true, &owner("secret")).await.unwrap();
        assert_eq!(token.as_deref(), Some("token-user-owner@example.com"));
    }

    #[tokio::test]
    async fn test_publishing_without_credentials_is_refused() {
        let config = Config::default().with_overrides(|name| match name {
            crate::config::STORE_URL_ENV => Some("https://db.example.com".to_string()),
            crate::config::STORE_KEY_ENV => Some("anon".to_string()),
            _ => None,
        });

        let err = open_publishing_store(&config, false).await.err().expect("expected publishing to be refused");
        assert!(err.to_string().starts_with("Sign in required"));

        // Dry runs and unconfigured stores publish nothing
        assert!(open_publishing_store(&config, true).await.is_ok());
        assert!(open_publishing_store(&Config::default(), false).await.is_ok());
    }

    #[test]
    fn test_store_selection() {
        let config = Config::default();
        assert!(!open_store(&config, false).unwrap().is_configured());
        assert!(open_store(&config, true).unwrap().is_configured());

        let config = Config::default().with_overrides(|_| Some("https://db.example.com".to_string()));
        assert!(open_store(&config, false).unwrap().is_configured());
    }

    #[test]
    fn test_read_section_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        std::fs::write(
            &path,
            r#"{ "sectionTitle": "FAQ", "faqs": [{ "id": 1, "question": "Q?", "answer": "A." }] }"#,
        )
        .unwrap();

        let content = read_section(SectionKey::Faq, &path).unwrap();
        assert_eq!(content.key(), SectionKey::Faq);
    }

    #[test]
    fn test_read_section_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = read_section(SectionKey::Faq, &path).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
        assert!(read_section(SectionKey::Faq, &dir.path().join("missing.json")).is_err());
    }
}
