//! `storefront-auth`: credential verification boundary.
//!
//! Decoupled from HTTP: callers extract the presented credential from wherever
//! their transport carries it and hand it to a [`CredentialVerifier`].

pub mod credential;

pub use credential::{AuthError, CredentialVerifier, StaticApiKey, API_KEY_HEADER};
