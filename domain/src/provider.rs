//! Identity providers this service can exchange authorization codes with.
//!
//! Every provider is described by a [`Descriptor`]: where its token endpoint lives, how it
//! expects the client credentials to be delivered, whether it runs PKCE, and an optional
//! hook applied to successful token responses. The token exchange routine is written once
//! against this table instead of once per provider.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, Secret};
use serde_json::{Map, Value};
use service::config::Config;

use crate::error::Error;
use crate::token_exchange::attach_debug_summary;

/// Known OAuth providers, named by the kind of platform they front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Video,
    Chat,
    Music,
    Social,
    Streaming,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::Video,
        ProviderKind::Chat,
        ProviderKind::Music,
        ProviderKind::Social,
        ProviderKind::Streaming,
    ];

    /// The identifier used in request paths and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Video => "video",
            ProviderKind::Chat => "chat",
            ProviderKind::Music => "music",
            ProviderKind::Social => "social",
            ProviderKind::Streaming => "streaming",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(name: &str) -> Result<ProviderKind, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownProvider(name.to_string()))
    }
}

/// How the client ID and secret reach the provider's token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialDelivery {
    /// `client_id` and `client_secret` are form fields next to the grant.
    RequestBody,
    /// `Authorization: Basic base64(client_id:client_secret)`; the body carries only the grant.
    BasicAuth,
}

/// Everything the exchange routine needs to know about one provider.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub kind: ProviderKind,
    pub token_url: String,
    pub credential_delivery: CredentialDelivery,
    pub requires_code_verifier: bool,
    /// Applied to a successful, object-shaped token response before it is returned.
    pub augment_success: Option<fn(&mut Map<String, Value>)>,
}

impl Descriptor {
    pub fn for_provider(kind: ProviderKind, config: &Config) -> Self {
        match kind {
            ProviderKind::Video => Descriptor {
                kind,
                token_url: config.video_token_url().to_string(),
                credential_delivery: CredentialDelivery::RequestBody,
                requires_code_verifier: false,
                augment_success: None,
            },
            ProviderKind::Chat => Descriptor {
                kind,
                token_url: config.chat_token_url().to_string(),
                credential_delivery: CredentialDelivery::RequestBody,
                requires_code_verifier: false,
                augment_success: None,
            },
            ProviderKind::Music => Descriptor {
                kind,
                token_url: config.music_token_url().to_string(),
                credential_delivery: CredentialDelivery::BasicAuth,
                requires_code_verifier: false,
                augment_success: None,
            },
            // TODO: drop the `_debug` summary once the social login flow is stable in the client app
            ProviderKind::Social => Descriptor {
                kind,
                token_url: config.social_token_url().to_string(),
                credential_delivery: CredentialDelivery::BasicAuth,
                requires_code_verifier: true,
                augment_success: Some(attach_debug_summary),
            },
            ProviderKind::Streaming => Descriptor {
                kind,
                token_url: config.streaming_token_url().to_string(),
                credential_delivery: CredentialDelivery::RequestBody,
                requires_code_verifier: false,
                augment_success: None,
            },
        }
    }
}

/// Server-side client credentials for a single provider.
#[derive(Debug)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
}

impl ProviderCredentials {
    /// Looks up the credentials configured for `kind`.
    ///
    /// Fails with a config error when either half of the pair is missing or empty.
    pub fn from_config(kind: ProviderKind, config: &Config) -> Result<Self, Error> {
        let (client_id, client_secret) = match kind {
            ProviderKind::Video => (config.video_client_id(), config.video_client_secret()),
            ProviderKind::Chat => (config.chat_client_id(), config.chat_client_secret()),
            ProviderKind::Music => (config.music_client_id(), config.music_client_secret()),
            ProviderKind::Social => (config.social_client_id(), config.social_client_secret()),
            ProviderKind::Streaming => (
                config.streaming_client_id(),
                config.streaming_client_secret(),
            ),
        };

        match (non_empty(client_id), non_empty(client_secret)) {
            (Some(client_id), Some(client_secret)) => Ok(ProviderCredentials {
                client_id: client_id.to_string(),
                client_secret: Secret::new(client_secret.to_string()),
            }),
            _ => Err(Error::config(&format!(
                "{kind} client credentials are not configured"
            ))),
        }
    }

    /// Value of an HTTP Basic `Authorization` header for these credentials.
    pub fn basic_authorization(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret.expose_secret());
        format!("Basic {}", STANDARD.encode(pair))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
