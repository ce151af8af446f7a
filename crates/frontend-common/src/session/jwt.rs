//! Unverified JWT payload decode.
//!
//! Last-resort offline fallback for session hydration: when the auth
//! service is unreachable the access token's payload still names the user.
//! The token is NOT verified here — trust stays with the server, which
//! rejects a bad token on the next request.

use base64::Engine as _;
use serde::Deserialize;

use nexabank_http::types::{User, UserType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: String,
    email: String,
    user_type: UserType,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

/// Decode the user named by a JWT access token, if the payload is intact.
pub fn decode_user(token: &str) -> Option<User> {
    let payload = token.split('.').nth(1)?;
    let bytes = decode_segment(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    Some(User {
        user_id: claims.user_id,
        email: claims.email,
        first_name: claims.first_name.unwrap_or_default(),
        last_name: claims.last_name.unwrap_or_default(),
        phone_number: String::new(),
        user_type: claims.user_type,
        status: None,
        roles: claims.roles,
        last_login: None,
        masked_aadhar: None,
        masked_pan: None,
    })
}

// JWT segments are base64url without padding; some issuers pad anyway.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| base64::engine::general_purpose::URL_SAFE.decode(segment))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_user_claims() {
        let token = token_with_payload(&serde_json::json!({
            "userId": "u-3",
            "email": "alan@nexabank.test",
            "userType": "EMPLOYEE",
            "firstName": "Alan",
            "lastName": "Turing",
            "roles": ["CUSTOMER_VIEW"],
            "exp": 1u64 << 33
        }));

        let user = decode_user(&token).unwrap();
        assert_eq!(user.user_id, "u-3");
        assert_eq!(user.user_type, UserType::Employee);
        assert_eq!(user.first_name, "Alan");
        assert!(user.has_role("CUSTOMER_VIEW"));
    }

    #[test]
    fn missing_optional_claims_default() {
        let token = token_with_payload(&serde_json::json!({
            "userId": "u-4",
            "email": "m@nexabank.test",
            "userType": "CUSTOMER"
        }));

        let user = decode_user(&token).unwrap();
        assert_eq!(user.first_name, "");
        assert!(user.roles.is_empty());
    }

    #[test]
    fn garbage_tokens_decode_to_none() {
        assert!(decode_user("").is_none());
        assert!(decode_user("only-one-segment").is_none());
        assert!(decode_user("a.!!!not-base64!!!.c").is_none());

        let truncated_json = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"{\"userId\"");
        assert!(decode_user(&format!("h.{truncated_json}.s")).is_none());
    }
}
