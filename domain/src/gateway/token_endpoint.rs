//! HTTP client for OAuth 2.0 token endpoints.
//!
//! Sends a single `authorization_code` grant to a provider and hands back the provider's
//! JSON answer. No retries and no explicit deadline are applied.

use log::*;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::provider::{CredentialDelivery, Descriptor, ProviderCredentials};

const GRANT_TYPE: &str = "authorization_code";

/// A validated authorization code grant, borrowed from the inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationGrant<'a> {
    pub code: &'a str,
    pub redirect_uri: &'a str,
    /// Only present for providers that run PKCE.
    pub code_verifier: Option<&'a str>,
}

/// Client for posting authorization code grants to a provider token endpoint
pub struct TokenEndpointClient {
    client: reqwest::Client,
}

impl TokenEndpointClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self { client })
    }

    /// Exchange an authorization code at the descriptor's token endpoint.
    ///
    /// Returns the provider's JSON body when it answers with a 2xx status, and a
    /// `Rejected` error carrying the provider's status and JSON body otherwise.
    pub async fn exchange_code(
        &self,
        descriptor: &Descriptor,
        credentials: &ProviderCredentials,
        grant: &AuthorizationGrant<'_>,
    ) -> Result<Value, Error> {
        let mut form: Vec<(&str, &str)> = vec![
            ("code", grant.code),
            ("grant_type", GRANT_TYPE),
            ("redirect_uri", grant.redirect_uri),
        ];
        if let Some(code_verifier) = grant.code_verifier {
            form.push(("code_verifier", code_verifier));
        }

        let mut request = self.client.post(&descriptor.token_url);
        match descriptor.credential_delivery {
            CredentialDelivery::RequestBody => {
                form.push(("client_id", credentials.client_id.as_str()));
                form.push((
                    "client_secret",
                    credentials.client_secret.expose_secret().as_str(),
                ));
            }
            CredentialDelivery::BasicAuth => {
                request = request.header(AUTHORIZATION, basic_auth_header(credentials)?);
            }
        }

        debug!(
            "Exchanging {} OAuth code at {}",
            descriptor.kind, descriptor.token_url
        );

        let response = request.form(&form).send().await.map_err(|e| {
            warn!("Failed to reach {} token endpoint: {:?}", descriptor.kind, e);
            Error::from(e)
        })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            warn!(
                "Failed to parse {} token response (status {}): {:?}",
                descriptor.kind, status, e
            );
            Error::from(e)
        })?;

        if status.is_success() {
            Ok(body)
        } else {
            warn!(
                "{} token endpoint rejected the exchange with status {}",
                descriptor.kind, status
            );
            Err(Error::rejected(status.as_u16(), body))
        }
    }
}

fn basic_auth_header(credentials: &ProviderCredentials) -> Result<HeaderValue, Error> {
    let mut header_value =
        HeaderValue::from_str(&credentials.basic_authorization()).map_err(|e| {
            warn!("Failed to create basic auth header: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Invalid client credential format".to_string(),
                )),
            }
        })?;
    header_value.set_sensitive(true);
    Ok(header_value)
}
