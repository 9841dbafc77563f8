//! GitHub webhook signature verification.
//!
//! GitHub signs webhook deliveries with HMAC-SHA256 over the raw request
//! body and sends the digest in the `X-Hub-Signature-256` header as
//! `sha256=<hex digest>`.
//! Reference: https://docs.github.com/en/webhooks/using-webhooks/validating-webhook-deliveries

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verify a GitHub webhook signature against the raw request body.
///
/// The body must be the exact bytes received on the wire; re-serializing
/// a parsed payload changes the byte sequence and breaks verification.
///
/// # Arguments
///
/// * `secret` - The shared webhook secret configured on the GitHub side
/// * `header` - The full `X-Hub-Signature-256` header value (`sha256=<hex>`)
/// * `body` - The raw request body bytes
///
/// # Returns
///
/// `true` if the signature matches, `false` for any mismatch or malformed
/// input. Malformed headers never produce an error; an attacker must not
/// learn why verification failed.
pub fn verify_signature(secret: &[u8], header: &str, body: &[u8]) -> bool {
    if secret.is_empty() || header.is_empty() {
        warn!(
            has_secret = !secret.is_empty(),
            has_header = !header.is_empty(),
            "signature_missing_inputs"
        );
        return false;
    }

    let digest_hex = match header.strip_prefix("sha256=") {
        Some(d) => d,
        None => {
            warn!("signature_header_malformed");
            return false;
        }
    };

    let claimed = match hex::decode(digest_hex) {
        Ok(b) => b,
        Err(_) => {
            warn!("signature_digest_not_hex");
            return false;
        }
    };

    // Compute expected digest: HMAC-SHA256(secret, body)
    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(m) => m,
        Err(_) => {
            warn!("signature_invalid_key");
            return false;
        }
    };

    mac.update(body);
    let expected = mac.finalize().into_bytes();

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected, &claimed);

    if !valid {
        warn!(
            expected_length = expected.len(),
            claimed_length = claimed.len(),
            "signature_mismatch"
        );
    }

    valid
}

/// Constant-time byte comparison to prevent timing attacks.
///
/// The XOR fold examines every byte pair regardless of where the inputs
/// first differ; only the length check returns early, and lengths are
/// not secret.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
