//! PKCE verifier/challenge generation for the device-code flow.
//!
//! The vendor follows the RFC 7636 construction (challenge =
//! base64url(sha256(verifier))) but names the method `sha256` rather than
//! `S256`, so that string is reproduced as documented.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// The challenge method string the vendor expects.
pub const CODE_CHALLENGE_METHOD: &str = "sha256";

/// PKCE Code Challenge parameters
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    pub code_verifier: String,
    pub code_challenge: String,
    pub code_challenge_method: String,
}

impl PkceChallenge {
    /// Generate a fresh verifier/challenge pair for one device-auth attempt.
    ///
    /// The verifier is 32 random bytes hex-encoded (64 ASCII characters),
    /// which keeps it inside the RFC 7636 unreserved character set.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        let code_verifier = hex::encode(bytes);
        let code_challenge = code_challenge(&code_verifier);

        Self {
            code_verifier,
            code_challenge,
            code_challenge_method: CODE_CHALLENGE_METHOD.to_string(),
        }
    }
}

/// Compute the challenge for a verifier: base64url (no padding) of the
/// SHA-256 digest of the verifier's ASCII bytes.
pub fn code_challenge(code_verifier: &str) -> String {
    let digest = Sha256::digest(code_verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifier_is_64_hex_chars() {
        let pkce = PkceChallenge::generate();
        assert_eq!(pkce.code_verifier.len(), 64);
        assert!(pkce.code_verifier.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(pkce.code_challenge_method, "sha256");
    }

    #[test]
    fn challenge_matches_rfc7636_construction() {
        // SHA-256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        let challenge = code_challenge("abc");
        assert_eq!(challenge, "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
    }

    #[test]
    fn each_attempt_gets_a_fresh_pair() {
        let a = PkceChallenge::generate();
        let b = PkceChallenge::generate();
        assert_ne!(a.code_verifier, b.code_verifier);
        assert_ne!(a.code_challenge, b.code_challenge);
        assert_eq!(a.code_challenge, code_challenge(&a.code_verifier));
    }
}
