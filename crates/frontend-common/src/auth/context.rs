//! Global session context and provider

use std::rc::Rc;

use nexabank_http::types::{AuthResponse, User};
use nexabank_http::ClientError;
use yew::prelude::*;

use crate::client::portal_client;
use crate::session::{handoff, jwt, store};

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionData {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true, // Start with loading until bootstrap settles
            error: None,
        }
    }
}

/// Session context actions
pub enum SessionAction {
    /// A fresh token pair was issued (login or registration): persist it
    /// and take the user from the response.
    Login(AuthResponse),
    /// Hydrated from a hand-off or storage; tokens are already persisted.
    Restore(User),
    /// Drop the local session, including the stored tokens.
    Logout,
    SetLoading(bool),
    SetError(Option<String>),
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionData>;

impl Reducible for SessionData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login(auth) => {
                store::persist_tokens(&auth.access_token, &auth.refresh_token);
                Rc::new(Self {
                    user: Some(auth.user),
                    is_loading: false,
                    error: None,
                })
            }
            SessionAction::Restore(user) => Rc::new(Self {
                user: Some(user),
                is_loading: false,
                error: None,
            }),
            SessionAction::Logout => {
                store::clear_tokens();
                Rc::new(Self {
                    user: None,
                    is_loading: false,
                    error: None,
                })
            }
            SessionAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
            SessionAction::SetError(error) => Rc::new(Self {
                error,
                ..(*self).clone()
            }),
        }
    }
}

/// How a surface hydrates its session at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BootstrapMode {
    /// Consume a hand-off from the URL before consulting storage (the
    /// Customer application is a hand-off target).
    #[default]
    HandoffThenStorage,
    /// Storage only, for surfaces that are never handed a session via URL.
    StorageOnly,
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
    #[prop_or_default]
    pub bootstrap: BootstrapMode,
}

/// Session provider component. Hydration runs exactly once at mount and
/// resolves the precedence between hand-off, stored token and JWT fallback
/// there — never again on later renders.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionData::default);

    {
        let session = session.clone();
        let bootstrap = props.bootstrap;
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                hydrate(session, bootstrap).await;
            });
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// The single authoritative hydration path.
async fn hydrate(session: SessionContext, bootstrap: BootstrapMode) {
    if bootstrap == BootstrapMode::HandoffThenStorage {
        if let Some(payload) = handoff::take_from_location() {
            tracing::info!("session hydrated from cross-application hand-off");
            session.dispatch(SessionAction::Restore(payload.user));
            return;
        }
    }

    let Some(access_token) = store::stored_access_token() else {
        session.dispatch(SessionAction::SetLoading(false));
        return;
    };

    let client = match portal_client() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("failed to build portal client: {err}");
            session.dispatch(SessionAction::SetLoading(false));
            return;
        }
    };

    match client.current_user().await {
        Ok(user) => session.dispatch(SessionAction::Restore(user)),
        Err(ClientError::Request(err)) => {
            // Transport failure: the token may still be good, so fall back
            // to its payload rather than dropping the session while offline.
            tracing::warn!("auth service unreachable during bootstrap: {err}");
            match jwt::decode_user(&access_token) {
                Some(user) => session.dispatch(SessionAction::Restore(user)),
                None => {
                    store::clear_tokens();
                    session.dispatch(SessionAction::SetLoading(false));
                }
            }
        }
        Err(err) => {
            // The service answered and rejected the session.
            tracing::warn!("stored session rejected: {err}");
            store::clear_tokens();
            session.dispatch(SessionAction::SetLoading(false));
        }
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current user
#[hook]
pub fn use_session_user() -> Option<User> {
    let session = use_session();
    session.user.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.user.is_some()
}
