//! Application shell and routing for the Login surface.
//!
//! The Login origin has three jobs: authenticate or register a user, show
//! the logged-out / session-expired notices posted back by the Customer
//! application, and hand a fresh session off to the Customer origin.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use nexabank_frontend_common::auth::{
    error_handler, use_session, BootstrapMode, SessionAction, SessionProvider,
};
use nexabank_frontend_common::components::LoadingSpinner;
use nexabank_frontend_common::session::{handoff, store, HandoffPayload, LogoutMarker};
use nexabank_frontend_common::AppConfig;
use nexabank_http::types::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{LoginPage, RegisterPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(LoginApp)]
pub fn login_app() -> Html {
    // Capture any logout marker synchronously, before session hydration
    // runs: a marker always clears local state and suppresses the
    // auto-redirect that would otherwise bounce a stale session straight
    // back to the Customer origin.
    let marker = use_state(|| {
        let marker = handoff::take_logout_marker();
        if marker.is_some() {
            store::clear_tokens();
        }
        marker
    });

    let on_dismiss_marker = {
        let marker = marker.clone();
        Callback::from(move |()| marker.set(None))
    };

    html! {
        <SessionProvider bootstrap={BootstrapMode::StorageOnly}>
            <BrowserRouter>
                <LoginAppContent marker={*marker} {on_dismiss_marker} />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    marker: Option<LogoutMarker>,
    on_dismiss_marker: Callback<()>,
}

#[function_component(LoginAppContent)]
fn login_app_content(props: &ContentProps) -> Html {
    let session = use_session();
    let suppress_redirect = props.marker.is_some();

    // Session expiry on this surface just drops back to the login form.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            error_handler::set_session_expired_callback(Rc::new(move || {
                session.dispatch(SessionAction::Logout);
            }));
            move || error_handler::clear_session_expired_callback()
        });
    }

    // Hand the session off to the Customer application once auth settles.
    use_effect_with(
        (session.user.clone(), suppress_redirect),
        move |(user, suppress)| {
            let mut timeout = None;
            if !*suppress {
                if let Some(user) = user.clone() {
                    // Short delay so the welcome screen is visible and the
                    // auth state is stable before the navigation fires.
                    timeout = Some(Timeout::new(AppConfig::WELCOME_REDIRECT_DELAY_MS, move || {
                        hand_off_to_customer(&user);
                    }));
                }
            }
            move || drop(timeout)
        },
    );

    if session.is_loading {
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <LoadingSpinner text={Some("Loading...".to_string())} />
            </div>
        };
    }

    let authenticated = session.user.is_some();
    let first_name = session.user.as_ref().map(|user| user.first_name.clone());
    let marker = props.marker;
    let on_dismiss_marker = props.on_dismiss_marker.clone();

    html! {
        <Switch<Route> render={move |route| {
            switch(route, authenticated, first_name.clone(), marker, on_dismiss_marker.clone())
        }} />
    }
}

fn switch(
    route: Route,
    authenticated: bool,
    first_name: Option<String>,
    marker: Option<LogoutMarker>,
    on_dismiss_marker: Callback<()>,
) -> Html {
    match route {
        Route::Login | Route::Register if authenticated => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Home if authenticated => welcome_screen(first_name),
        Route::Home => match marker {
            Some(marker) => logout_notice(marker, on_dismiss_marker),
            None => html! { <Redirect<Route> to={Route::Login} /> },
        },
        Route::NotFound => html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 mb-4">{"404"}</h1>
                    <p class="text-gray-600 mb-4">{"Page not found"}</p>
                    <a href="/" class="text-blue-600 hover:underline">{"Go back home"}</a>
                </div>
            </div>
        },
    }
}

/// Shown while the hand-off timer runs.
fn welcome_screen(first_name: Option<String>) -> Html {
    let name = first_name.filter(|n| !n.is_empty()).unwrap_or_else(|| "User".to_string());
    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center">
            <div class="text-center bg-white rounded-lg shadow-lg p-8 max-w-md">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto mb-4"></div>
                <h2 class="text-2xl font-bold text-gray-900 mb-2">
                    {format!("Welcome back, {name}!")}
                </h2>
                <p class="text-gray-600">{"Taking you to your dashboard..."}</p>
            </div>
        </div>
    }
}

fn logout_notice(marker: LogoutMarker, on_dismiss_marker: Callback<()>) -> Html {
    let (title, message) = match marker {
        LogoutMarker::LoggedOut => (
            "Logged Out Successfully",
            "You have been successfully logged out from all services.",
        ),
        LogoutMarker::SessionExpired => (
            "Session Expired",
            "Your session has expired. Please log in again to continue.",
        ),
    };

    let onclick = Callback::from(move |_: MouseEvent| on_dismiss_marker.emit(()));

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center max-w-md">
                <h1 class="text-2xl font-bold text-gray-900 mb-4">{title}</h1>
                <p class="text-gray-600 mb-6">{message}</p>
                <button
                    {onclick}
                    class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition-colors"
                >
                    {"Continue to Login"}
                </button>
            </div>
        </div>
    }
}

/// Build the hand-off URL from the stored pair and leave for the Customer
/// origin. Local state is cleared first so a later visit to this origin
/// shows the login page again.
fn hand_off_to_customer(user: &User) {
    let (Some(access_token), Some(refresh_token)) =
        (store::stored_access_token(), store::stored_refresh_token())
    else {
        return;
    };

    store::clear_tokens();

    handoff::navigate_to_customer(&HandoffPayload {
        access_token,
        refresh_token,
        user: user.clone(),
    });
}
