use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Random bytes per session token (256 bits of entropy).
const SESSION_TOKEN_BYTES: usize = 32;

/// Generates an unguessable session token from OS entropy, URL-safe base64 without padding.
pub fn generate_session_token() -> String {
    let mut buffer = [0u8; SESSION_TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_distinct_and_cookie_safe() {
        let tokens: HashSet<String> = (0..256).map(|_| generate_session_token()).collect();
        assert_eq!(tokens.len(), 256);

        for token in &tokens {
            // 32 bytes -> 43 base64 characters without padding.
            assert_eq!(token.len(), 43);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }
}
