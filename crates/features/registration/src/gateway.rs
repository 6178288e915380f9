//! Outbound call to the user service.

use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::model::{CreatedUser, UserPayload};
use nwatch_domain::config::ApiConfig;
use nwatch_domain::constants::USERS_PATH;
use reqwest::{Client, Url};
use std::future::Future;
use tracing::{debug, instrument};

/// Outcome category of one submission, as the user sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionResult {
    Success,
    DuplicateConflict,
    GenericFailure,
}

/// A successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub status: u16,
    /// The echoed record, when the body could be decoded.
    pub user: Option<CreatedUser>,
}

/// Transport seam between the form and the user service.
///
/// Implementations perform exactly one request per call and never retry.
pub trait UserGateway: Send + Sync + 'static {
    /// Sends the payload. Any non-2xx answer is an error.
    fn register(
        &self,
        payload: &UserPayload,
    ) -> impl Future<Output = Result<Registered, RegistrationError>> + Send;
}

/// [`UserGateway`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    client: Client,
    endpoint: Url,
}

impl HttpUserGateway {
    /// Builds a gateway posting to `{base_url}/api/users`.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Config`] for an unparsable base URL and
    /// [`RegistrationError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, RegistrationError> {
        let endpoint = endpoint(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Building HTTP client")?;

        debug!(%endpoint, timeout = ?config.timeout(), "User gateway ready");
        Ok(Self { client, endpoint })
    }

    /// The full URL requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn endpoint(base_url: &str) -> Result<Url, RegistrationError> {
    let joined = format!("{}{USERS_PATH}", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| RegistrationError::Config {
        message: format!("Invalid API base URL '{base_url}': {e}").into(),
        context: None,
    })
}

impl UserGateway for HttpUserGateway {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn register(&self, payload: &UserPayload) -> Result<Registered, RegistrationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .context("Posting registration")?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unexpected status");
            return Err(RegistrationError::Rejected {
                status: status.as_u16(),
                message: reason.into(),
                context: None,
            });
        }

        let user = response.json::<CreatedUser>().await.ok();
        debug!(status = status.as_u16(), decoded = user.is_some(), "Registration accepted");

        Ok(Registered { status: status.as_u16(), user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_users_path() {
        assert_eq!(endpoint("http://localhost:8081").unwrap().as_str(), "http://localhost:8081/api/users");
        assert_eq!(endpoint("http://host:1/").unwrap().as_str(), "http://host:1/api/users");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = endpoint("not a url").unwrap_err();
        assert!(matches!(err, RegistrationError::Config { .. }));
        assert_eq!(err.classify(), SubmissionResult::GenericFailure);
    }
}
