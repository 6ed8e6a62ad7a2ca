//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims for use in the CLI
//! integration tests.
#![allow(dead_code)]

/// The jwt.io sample token.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","iat":1516239022}`
pub const JWT_IO_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "abc.def";

/// A token with one dot too many.
pub const MALFORMED_TOKEN_FOUR_PARTS: &str = "a.b.c.d";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// Secret used to sign fixture tokens. The decoder never checks it.
pub const HMAC_TEST_SECRET: &str = "decode-test-secret";

/// Expiry far in the future (2100-01-01T00:00:00Z).
pub const FAR_FUTURE_EXP: i64 = 4_102_444_800;

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(HMAC_TEST_SECRET.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// A token whose `exp` lies far in the future.
pub fn valid_token() -> String {
    create_hs256_token(&serde_json::json!({
        "sub": "1234567890",
        "iat": 1516239022,
        "exp": FAR_FUTURE_EXP
    }))
}

/// A token that expired at epoch second 1000.
pub fn expired_token() -> String {
    create_hs256_token(&serde_json::json!({"sub": "1234567890", "exp": 1000}))
}

/// A token whose `exp` is not a number.
pub fn invalid_exp_token() -> String {
    create_hs256_token(&serde_json::json!({"sub": "1234567890", "exp": "not-a-number"}))
}
