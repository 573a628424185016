//! Upload-authentication parameter minting.
//!
//! Browsers upload directly to the CDN. To authorize an upload without
//! exposing the private key, the backend mints `{token, expire, signature}`
//! where `signature = hex(hmac_sha256(token + expire, private_key))`. The
//! CDN recomputes the same HMAC to verify the grant.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Short-lived parameters authorizing one browser-side upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadAuthParams {
    /// Single-use random token (UUID v4).
    pub token: String,
    /// Unix timestamp after which the grant is rejected.
    pub expire: i64,
    /// Hex HMAC-SHA256 over `token + expire`.
    pub signature: String,
}

/// Mint upload-auth parameters expiring `expiry_secs` from now.
pub fn mint_params(private_key: &str, expiry_secs: i64) -> UploadAuthParams {
    let token = uuid::Uuid::new_v4().to_string();
    let expire = chrono::Utc::now().timestamp() + expiry_secs;
    let signature = sign(private_key, &token, expire);
    UploadAuthParams {
        token,
        expire,
        signature,
    }
}

/// Compute the hex HMAC-SHA256 signature over `token + expire`.
pub fn sign(private_key: &str, token: &str, expire: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(private_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(token.as_bytes());
    mac.update(expire.to_string().as_bytes());
    let digest = mac.finalize().into_bytes();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_deterministic() {
        let a = sign("private_key_test", "token-1", 1_700_000_000);
        let b = sign("private_key_test", "token-1", 1_700_000_000);
        assert_eq!(a, b, "same inputs must produce the same signature");
        // SHA-256 digest as hex.
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_signature_binds_token_and_expire() {
        let base = sign("private_key_test", "token-1", 1_700_000_000);
        assert_ne!(base, sign("private_key_test", "token-2", 1_700_000_000));
        assert_ne!(base, sign("private_key_test", "token-1", 1_700_000_001));
        assert_ne!(base, sign("other_key", "token-1", 1_700_000_000));
    }

    #[test]
    fn test_minted_params_verify() {
        let params = mint_params("private_key_test", 1800);
        assert!(!params.token.is_empty());
        assert!(params.expire > chrono::Utc::now().timestamp());
        assert_eq!(
            params.signature,
            sign("private_key_test", &params.token, params.expire)
        );
    }
}
