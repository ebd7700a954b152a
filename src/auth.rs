//! Authenticator
//!
//! Checks the caller's password against the single shared secret.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::{GatewayError, Result};

/// Holds the process-wide secret; cheap to clone.
#[derive(Clone)]
pub struct Authenticator {
    secret: Arc<str>,
}

impl Authenticator {
    /// Creates an authenticator for `secret`.
    ///
    /// An empty secret is compared literally: only an empty password passes.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::from(secret.into()),
        }
    }

    /// Succeeds only when `credential` equals the secret exactly.
    pub fn validate(&self, credential: &str) -> Result<()> {
        if credential == &*self.secret {
            Ok(())
        } else {
            warn!("Rejected request with invalid credential");
            Err(GatewayError::Unauthorized)
        }
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_matching_credential() {
        let auth = Authenticator::new("s3cret");
        assert_ok!(auth.validate("s3cret"));
    }

    #[test]
    fn test_mismatched_credential() {
        let auth = Authenticator::new("s3cret");

        assert_eq!(auth.validate("wrong"), Err(GatewayError::Unauthorized));
        assert_err!(auth.validate(""));
        assert_err!(auth.validate("S3CRET"));
        assert_err!(auth.validate("s3cret "));
    }

    #[test]
    fn test_empty_secret_accepts_only_empty_password() {
        let auth = Authenticator::new("");

        assert_ok!(auth.validate(""));
        assert_err!(auth.validate("anything"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let auth = Authenticator::new("s3cret");
        let output = format!("{:?}", auth);

        assert!(!output.contains("s3cret"));
        assert!(output.contains("redacted"));
    }
}
