//! Application shell and routing for the Customer surface.
//!
//! Bootstrap consumes the cross-application hand-off before consulting
//! storage. An unauthenticated visitor (once bootstrap settles) is sent back
//! to the Login origin with a full navigation; role checks past that point
//! block render with a message instead of redirecting.

use std::rc::Rc;

use nexabank_frontend_common::auth::{
    error_handler, use_session, BootstrapMode, SessionAction, SessionProvider,
};
use nexabank_frontend_common::components::{LoadingSpinner, RequireRole};
use nexabank_frontend_common::hooks::use_idle_logout;
use nexabank_frontend_common::services::AuthApiService;
use nexabank_frontend_common::session::{handoff, LogoutMarker};
use nexabank_http::types::UserType;
use yew::prelude::*;
use yew_router::prelude::*;


use crate::pages::{AdminDashboard, CustomerDashboard, DashboardRouter, TransferPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/dashboard")]
    Dashboard,
    #[at("/transfers")]
    Transfers,
    #[at("/accounts")]
    Accounts,
    #[at("/services")]
    Services,
    #[at("/support")]
    Support,
    #[at("/admin")]
    Admin,
    #[at("/employee")]
    Employee,
    #[at("/customer")]
    Customer,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(CustomerApp)]
pub fn customer_app() -> Html {
    html! {
        <SessionProvider bootstrap={BootstrapMode::HandoffThenStorage}>
            <BrowserRouter>
                <CustomerAppContent />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[function_component(CustomerAppContent)]
fn customer_app_content() -> Html {
    let session = use_session();
    let is_authenticated = session.user.is_some();

    // Unrecoverable refresh failures land back on the Login origin.
    use_effect_with((), move |_| {
        error_handler::set_session_expired_callback(Rc::new(|| {
            handoff::navigate_to_login(Some(LogoutMarker::SessionExpired));
        }));
        move || error_handler::clear_session_expired_callback()
    });

    // Idle enforcement across the whole authenticated surface.
    let on_idle_logout = {
        let session = session.clone();
        Callback::from(move |()| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Best-effort server-side revocation; local logout proceeds
                // regardless.
                if let Err(err) = AuthApiService::new().logout().await {
                    tracing::warn!("logout call failed during idle expiry: {err}");
                }
                session.dispatch(SessionAction::Logout);
                handoff::navigate_to_login(Some(LogoutMarker::SessionExpired));
            });
        })
    };
    use_idle_logout(is_authenticated, on_idle_logout);

    if session.is_loading {
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <LoadingSpinner text={Some("Loading...".to_string())} />
            </div>
        };
    }

    if !is_authenticated {
        // Full navigation: the login surface lives on another origin.
        handoff::navigate_to_login(None);
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <LoadingSpinner text={Some("Redirecting to login...".to_string())} />
            </div>
        };
    }

    html! { <Switch<Route> render={switch} /> }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardRouter /> },
        Route::Transfers => html! { <TransferPage /> },
        Route::Accounts => placeholder(
            "Account Management",
            "Account details and management features coming soon...",
        ),
        Route::Services => placeholder(
            "Banking Services",
            "Additional banking services coming soon...",
        ),
        Route::Support => placeholder("Customer Support", "Support features coming soon..."),
        Route::Admin => html! {
            <RequireRole user_type={UserType::Admin}>
                <AdminDashboard />
            </RequireRole>
        },
        Route::Employee => html! {
            <RequireRole user_type={UserType::Employee}>
                <AdminDashboard />
            </RequireRole>
        },
        Route::Customer => html! {
            <RequireRole user_type={UserType::Customer}>
                <CustomerDashboard />
            </RequireRole>
        },
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
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

fn placeholder(title: &str, message: &str) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-2xl font-bold text-gray-900 mb-4">{title}</h1>
                <p class="text-gray-600">{message}</p>
            </div>
        </div>
    }
}
