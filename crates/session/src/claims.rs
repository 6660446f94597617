//! Claims carried by an access token

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::Deserialize;
use std::collections::HashSet;

use crate::SessionError;

/// The subset of access-token claims the client cares about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id)
    #[serde(default)]
    pub sub: Option<String>,

    /// Expiry, seconds since the epoch
    #[serde(default)]
    pub exp: Option<i64>,

    /// Issued at, seconds since the epoch
    #[serde(default)]
    pub iat: Option<i64>,
}

impl AccessClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0))
    }
}

/// Read the claims of `token` without verifying its signature.
///
/// The client holds no key material; the backend verifies signatures.
/// Only the structure and the `exp` claim matter here.
pub fn decode_claims(token: &str) -> Result<AccessClaims, SessionError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    let data = jsonwebtoken::decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    #[test]
    fn test_decode_ignores_signature() {
        let token = encode(
            &Header::default(),
            &json!({ "sub": "user-1", "exp": 1_700_000_000 }),
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap();

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("user-1"));
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_decode_without_exp() {
        let token = encode(
            &Header::default(),
            &json!({ "sub": "user-1" }),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap();

        let claims = decode_claims(&token).unwrap();
        assert!(claims.exp.is_none());
        assert!(claims.expires_at().is_none());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_claims("not-a-jwt").is_err());
        assert!(decode_claims("a.b.c").is_err());
    }
}
