//! Authorization code exchange with third-party OAuth providers.
//!
//! `web` depends on this crate only through [`token_exchange::exchange_code`], the
//! [`ProviderKind`] it is keyed by, and the [`error`] tree it reports failures with.
//! Provider secrets come from `service::config::Config` and never leave this crate.

pub use provider::ProviderKind;
pub use token_exchange::TokenExchangeRequest;

pub mod error;
pub mod provider;
pub mod token_exchange;

pub mod gateway;
