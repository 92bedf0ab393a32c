use subtle::ConstantTimeEq;
use thiserror::Error;

/// Request header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no credential presented")]
    Missing,

    #[error("credential rejected")]
    Invalid,
}

/// Decides whether a presented credential grants access to protected operations.
pub trait CredentialVerifier: Send + Sync {
    /// `presented` is `None` when the request carried no credential at all.
    fn verify(&self, presented: Option<&str>) -> Result<(), AuthError>;
}

impl<V> CredentialVerifier for std::sync::Arc<V>
where
    V: CredentialVerifier + ?Sized,
{
    fn verify(&self, presented: Option<&str>) -> Result<(), AuthError> {
        (**self).verify(presented)
    }
}

/// A single process-wide shared secret.
///
/// Placeholder scheme for demos; swap in another [`CredentialVerifier`] for real
/// authentication.
#[derive(Clone)]
pub struct StaticApiKey {
    secret: String,
}

impl StaticApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl core::fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaticApiKey").finish_non_exhaustive()
    }
}

impl CredentialVerifier for StaticApiKey {
    fn verify(&self, presented: Option<&str>) -> Result<(), AuthError> {
        let presented = presented.ok_or(AuthError::Missing)?;
        if presented.is_empty() {
            return Err(AuthError::Missing);
        }
        // Constant-time compare; slices of different length compare unequal.
        if bool::from(presented.as_bytes().ct_eq(self.secret.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::Invalid)
        }
    }
}
