//! Identity authority client.
//!
//! The authority is the system of record for user accounts and credentials.
//! This module is the only seam through which the service reaches it, and it
//! covers exactly two operations: updating a stored password and generating a
//! password-reset link. The client is constructed once at startup and passed
//! into the router; nothing here is ambient.

use crate::{cli::globals::GlobalArgs, APP_USER_AGENT};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

pub type DynAuthority = Arc<dyn IdentityAuthority>;

/// The two administrative operations the authority offers.
///
/// Both are single-attempt: a failed password update may still have been
/// applied at the authority, so retry policy is left to the caller.
#[async_trait]
pub trait IdentityAuthority: Send + Sync {
    /// Replace the stored password for `user_id`.
    async fn update_password(&self, user_id: &str, new_password: &str) -> Result<()>;

    /// Generate a password-reset link for `email`.
    ///
    /// Link stability across calls is authority-defined; callers must not
    /// assume two calls return the same link.
    async fn generate_reset_link(&self, email: &str) -> Result<String>;
}

/// Normalize the authority URL to `scheme://host:port`
pub fn base_url(authority_url: &str) -> Result<String> {
    let url = Url::parse(authority_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    Ok(format!("{scheme}://{host}:{port}"))
}

#[derive(Debug)]
pub struct HttpAuthority {
    base_url: String,
    token: SecretString,
    client: Client,
}

impl HttpAuthority {
    /// Build the client from the process globals.
    /// # Errors
    /// Returns an error if the authority URL cannot be normalized or the HTTP
    /// client cannot be built.
    pub fn new(globals: &GlobalArgs) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            base_url: base_url(&globals.authority_url)?,
            token: globals.authority_token.clone(),
            client,
        })
    }

    /// POST `payload` to the authority, returning the parsed response body.
    ///
    /// Non-success responses carry `{"errors": ["..."]}`; the first entry is
    /// surfaced verbatim so callers see what the authority reported.
    async fn call(&self, endpoint: &str, payload: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("endpoint URL: {}", endpoint);

        let response = self
            .client
            .post(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let json_response: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = json_response["errors"][0]
                .as_str()
                .map_or_else(|| status.to_string(), str::to_string);

            return Err(anyhow!("{message}"));
        }

        Ok(json_response)
    }
}

#[async_trait]
impl IdentityAuthority for HttpAuthority {
    #[instrument(skip(self, new_password))]
    async fn update_password(&self, user_id: &str, new_password: &str) -> Result<()> {
        let payload = json!({
            "user_id": user_id,
            "password": new_password
        });

        self.call("/v1/accounts/update", &payload).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn generate_reset_link(&self, email: &str) -> Result<String> {
        let payload = json!({
            "email": email
        });

        let json_response = self.call("/v1/accounts/reset-link", &payload).await?;

        json_response["link"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Error parsing JSON response: no link found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_explicit_port() -> Result<()> {
        assert_eq!(
            base_url("https://authority.tld:9200")?,
            "https://authority.tld:9200"
        );
        Ok(())
    }

    #[test]
    fn test_base_url_default_ports() -> Result<()> {
        assert_eq!(base_url("http://authority.tld")?, "http://authority.tld:80");
        assert_eq!(
            base_url("https://authority.tld")?,
            "https://authority.tld:443"
        );
        Ok(())
    }

    #[test]
    fn test_base_url_drops_path() -> Result<()> {
        assert_eq!(
            base_url("https://authority.tld:9200/v1/ignored")?,
            "https://authority.tld:9200"
        );
        Ok(())
    }

    #[test]
    fn test_base_url_unsupported_scheme() {
        assert!(base_url("ftp://authority.tld").is_err());
    }

    #[test]
    fn test_base_url_no_host() {
        assert!(base_url("unix:/tmp/authority.sock").is_err());
    }

    #[test]
    fn test_new_from_globals() -> Result<()> {
        let mut globals = GlobalArgs::new("https://authority.tld".to_string());
        globals.set_token(SecretString::from("admin-token".to_string()));

        let authority = HttpAuthority::new(&globals)?;
        assert_eq!(authority.base_url, "https://authority.tld:443");
        Ok(())
    }
}
