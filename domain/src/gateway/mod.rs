//! Clients for the third-party services this crate talks to.
pub mod token_endpoint;
