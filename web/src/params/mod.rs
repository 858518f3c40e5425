//! Typed request bodies for the endpoints.
//!
//! Every field is optional here; presence rules depend on the provider and are enforced by
//! the domain layer so that a missing field becomes a 400 with the exchange's own message.

pub(crate) mod token_exchange;
