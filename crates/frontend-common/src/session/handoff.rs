//! Cross-application session hand-off.
//!
//! The Login application transfers an authenticated session to the Customer
//! origin by embedding the token pair and a serialized user object in the
//! target URL. The receiving bootstrap consumes the parameters before
//! consulting storage and immediately rewrites the visible URL so the tokens
//! do not linger in history or referrer headers. A hand-off is all-or-
//! nothing: a missing parameter or unparseable user object contributes
//! nothing and bootstrap falls through to the storage path.

use nexabank_http::types::User;

use crate::config::AppConfig;
use crate::session::store;

const TOKEN_PARAM: &str = "token";
const REFRESH_PARAM: &str = "refresh";
const USER_PARAM: &str = "user";

/// A complete hand-off read from the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

impl HandoffPayload {
    /// Parse a query string (with or without the leading `?`). Returns
    /// `None` unless all three parameters are present, non-empty, and the
    /// user object parses.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut access_token = None;
        let mut refresh_token = None;
        let mut user_json = None;

        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match &*key {
                TOKEN_PARAM => access_token = Some(value.into_owned()),
                REFRESH_PARAM => refresh_token = Some(value.into_owned()),
                USER_PARAM => user_json = Some(value.into_owned()),
                _ => {}
            }
        }

        let access_token = access_token.filter(|t| !t.is_empty())?;
        let refresh_token = refresh_token.filter(|t| !t.is_empty())?;
        let user = serde_json::from_str(&user_json?).ok()?;

        Some(Self {
            access_token,
            refresh_token,
            user,
        })
    }

    /// Encode the hand-off as a query string for the target URL.
    pub fn to_query(&self) -> Result<String, serde_json::Error> {
        let user_json = serde_json::to_string(&self.user)?;
        Ok(url::form_urlencoded::Serializer::new(String::new())
            .append_pair(TOKEN_PARAM, &self.access_token)
            .append_pair(REFRESH_PARAM, &self.refresh_token)
            .append_pair(USER_PARAM, &user_json)
            .finish())
    }
}

/// Marker appended to the Login origin URL by the reverse flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutMarker {
    /// Deliberate logout (possibly "logout everywhere").
    LoggedOut,
    /// Forced logout after an unrecoverable refresh failure.
    SessionExpired,
}

impl LogoutMarker {
    pub fn from_query(query: &str) -> Option<Self> {
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match (&*key, &*value) {
                ("loggedOut", "1") => return Some(Self::LoggedOut),
                ("session", "expired") => return Some(Self::SessionExpired),
                _ => {}
            }
        }
        None
    }

    pub fn query(self) -> &'static str {
        match self {
            Self::LoggedOut => "loggedOut=1",
            Self::SessionExpired => "session=expired",
        }
    }
}

/// Consume a hand-off from the current location, persisting the tokens and
/// scrubbing the parameters from the visible URL. Returns `None` (and
/// leaves storage untouched) when the URL carries no complete hand-off.
pub fn take_from_location() -> Option<HandoffPayload> {
    let window = web_sys::window()?;
    let query = window.location().search().ok()?;
    let payload = HandoffPayload::from_query(&query)?;

    store::persist_tokens(&payload.access_token, &payload.refresh_token);
    scrub_location();
    Some(payload)
}

/// Read and scrub a logout marker from the current location. The caller is
/// expected to clear any local session when one is present.
pub fn take_logout_marker() -> Option<LogoutMarker> {
    let window = web_sys::window()?;
    let query = window.location().search().ok()?;
    let marker = LogoutMarker::from_query(&query)?;
    scrub_location();
    Some(marker)
}

/// Rewrite the visible URL to origin + path, dropping the query string.
fn scrub_location() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(origin), Ok(pathname)) = (location.origin(), location.pathname()) else {
        return;
    };
    if let Ok(history) = window.history() {
        let clean = format!("{origin}{pathname}");
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean));
    }
}

/// Full navigation to the Customer origin carrying the hand-off.
pub fn navigate_to_customer(payload: &HandoffPayload) {
    let Ok(query) = payload.to_query() else {
        tracing::error!("failed to serialize hand-off payload");
        return;
    };
    if let Some(window) = web_sys::window() {
        let url = format!("{}?{query}", AppConfig::CUSTOMER_ORIGIN);
        // `replace` keeps the token-bearing URL out of the history stack.
        let _ = window.location().replace(&url);
    }
}

/// Full navigation to the Login origin, optionally carrying a marker.
pub fn navigate_to_login(marker: Option<LogoutMarker>) {
    if let Some(window) = web_sys::window() {
        let url = match marker {
            Some(marker) => format!("{}?{}", AppConfig::LOGIN_ORIGIN, marker.query()),
            None => AppConfig::LOGIN_ORIGIN.to_string(),
        };
        let _ = window.location().set_href(&url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexabank_http::types::UserType;

    fn user() -> User {
        serde_json::from_value(serde_json::json!({
            "userId": "u-9",
            "email": "grace@nexabank.test",
            "firstName": "Grace",
            "lastName": "Hopper",
            "phoneNumber": "5550002",
            "userType": "ADMIN",
            "roles": ["ADMIN_FULL_ACCESS"]
        }))
        .unwrap()
    }

    #[test]
    fn round_trips_through_query_string() {
        let payload = HandoffPayload {
            access_token: "acc&ess=1".into(),
            refresh_token: "ref+resh".into(),
            user: user(),
        };
        let query = payload.to_query().unwrap();
        let parsed = HandoffPayload::from_query(&query).unwrap();
        assert_eq!(parsed, payload);

        // Leading '?' is tolerated, as location.search includes it.
        let parsed = HandoffPayload::from_query(&format!("?{query}")).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn missing_any_parameter_is_no_handoff() {
        let user_json = serde_json::to_string(&user()).unwrap();
        let full: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("token", "a")
            .append_pair("refresh", "r")
            .append_pair("user", &user_json)
            .finish();
        assert!(HandoffPayload::from_query(&full).is_some());

        for drop in ["token", "refresh", "user"] {
            let partial: String = url::form_urlencoded::parse(full.as_bytes())
                .filter(|(k, _)| k != drop)
                .fold(
                    url::form_urlencoded::Serializer::new(String::new()),
                    |mut s, (k, v)| {
                        s.append_pair(&k, &v);
                        s
                    },
                )
                .finish();
            assert!(
                HandoffPayload::from_query(&partial).is_none(),
                "hand-off without `{drop}` must not parse"
            );
        }
    }

    #[test]
    fn empty_or_malformed_values_are_rejected() {
        assert!(HandoffPayload::from_query("token=&refresh=r&user=%7B%7D").is_none());
        assert!(HandoffPayload::from_query("token=a&refresh=r&user=not-json").is_none());
        assert!(HandoffPayload::from_query("").is_none());
    }

    #[test]
    fn parsed_user_retains_role_and_type() {
        let payload = HandoffPayload {
            access_token: "a".into(),
            refresh_token: "r".into(),
            user: user(),
        };
        let parsed = HandoffPayload::from_query(&payload.to_query().unwrap()).unwrap();
        assert_eq!(parsed.user.user_type, UserType::Admin);
        assert!(parsed.user.has_role("ADMIN_FULL_ACCESS"));
    }

    #[test]
    fn logout_markers_parse_exactly() {
        assert_eq!(
            LogoutMarker::from_query("?loggedOut=1"),
            Some(LogoutMarker::LoggedOut)
        );
        assert_eq!(
            LogoutMarker::from_query("session=expired"),
            Some(LogoutMarker::SessionExpired)
        );
        assert_eq!(LogoutMarker::from_query("loggedOut=0"), None);
        assert_eq!(LogoutMarker::from_query("session=active"), None);
        assert_eq!(LogoutMarker::from_query("token=a"), None);
    }
}
