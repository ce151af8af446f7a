//! Self-contained variant of the NexaBank UI.
//!
//! Login, registration and the dashboards live behind client-side routing
//! in one application; there is no cross-application hand-off. Bootstrap is
//! storage-only, with the JWT payload decode as the offline fallback.

use std::rc::Rc;

use nexabank_frontend_common::auth::{
    error_handler, use_session, BootstrapMode, SessionAction, SessionProvider,
};
use nexabank_frontend_common::components::LoadingSpinner;
use nexabank_frontend_common::hooks::use_idle_logout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{ClassicDashboard, ClassicLoginPage, ClassicRegisterPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(ClassicApp)]
pub fn classic_app() -> Html {
    html! {
        <SessionProvider bootstrap={BootstrapMode::StorageOnly}>
            <BrowserRouter>
                <ClassicAppContent />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[function_component(ClassicAppContent)]
fn classic_app_content() -> Html {
    let session = use_session();
    let is_authenticated = session.user.is_some();

    // Session expiry drops straight back to the login route; everything
    // lives on this origin.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            error_handler::set_session_expired_callback(Rc::new(move || {
                session.dispatch(SessionAction::Logout);
            }));
            move || error_handler::clear_session_expired_callback()
        });
    }

    let on_idle_logout = {
        let session = session.clone();
        Callback::from(move |()| {
            session.dispatch(SessionAction::Logout);
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

    html! {
        <Switch<Route> render={move |route| switch(route, is_authenticated)} />
    }
}

fn switch(route: Route, authenticated: bool) -> Html {
    match route {
        Route::Login | Route::Register if authenticated => {
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        }
        Route::Login => html! { <ClassicLoginPage /> },
        Route::Register => html! { <ClassicRegisterPage /> },
        Route::Dashboard if authenticated => html! { <ClassicDashboard /> },
        Route::Dashboard => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Home => {
            let target = if authenticated {
                Route::Dashboard
            } else {
                Route::Login
            };
            html! { <Redirect<Route> to={target} /> }
        }
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
