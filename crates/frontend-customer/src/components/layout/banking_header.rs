//! Page header for the authenticated surface: brand, primary navigation and
//! the user menu with both logout flavors.

use nexabank_frontend_common::auth::{use_session, SessionAction};
use nexabank_frontend_common::services::AuthApiService;
use nexabank_frontend_common::session::{handoff, LogoutMarker};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const NAV_ITEMS: [(&str, Route); 5] = [
    ("Dashboard", Route::Dashboard),
    ("Accounts", Route::Accounts),
    ("Transfers", Route::Transfers),
    ("Services", Route::Services),
    ("Support", Route::Support),
];

#[function_component(BankingHeader)]
pub fn banking_header() -> Html {
    let session = use_session();
    let show_user_menu = use_state(|| false);

    let user = session.user.clone();
    let (full_name, email, user_type) = match &user {
        Some(user) => (
            format!("{} {}", user.first_name, user.last_name),
            user.email.clone(),
            user.user_type.as_str().to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    let on_toggle_menu = {
        let show_user_menu = show_user_menu.clone();
        Callback::from(move |_: MouseEvent| show_user_menu.set(!*show_user_menu))
    };

    // Logout: revoke this session server-side (best effort), drop local
    // state, and return to the Login origin with the marker.
    let logout = {
        let session = session.clone();
        move |everywhere: bool| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = AuthApiService::new();
                let result = if everywhere {
                    service.logout_all().await
                } else {
                    service.logout().await
                };
                if let Err(err) = result {
                    tracing::warn!("logout call failed: {err}");
                }
                session.dispatch(SessionAction::Logout);
                handoff::navigate_to_login(Some(LogoutMarker::LoggedOut));
            });
        }
    };

    let on_logout = {
        let logout = logout.clone();
        Callback::from(move |_: MouseEvent| logout(false))
    };
    let on_logout_all = Callback::from(move |_: MouseEvent| logout(true));

    html! {
        <header class="bg-white border-b border-gray-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-4">
                        <Link<Route> to={Route::Dashboard} classes="flex items-center space-x-2">
                            <div class="w-8 h-8 bg-gradient-to-r from-blue-600 to-purple-700 rounded-lg flex items-center justify-center">
                                <span class="text-white font-bold text-sm">{"NB"}</span>
                            </div>
                            <span class="text-xl font-bold text-gray-900">{"NexaBank"}</span>
                        </Link<Route>>
                    </div>

                    <nav class="hidden md:flex space-x-8">
                        {for NAV_ITEMS.iter().map(|(name, route)| html! {
                            <Link<Route>
                                to={route.clone()}
                                classes="text-sm font-medium text-gray-600 hover:text-blue-600 transition-colors"
                            >
                                {*name}
                            </Link<Route>>
                        })}
                    </nav>

                    <div class="relative">
                        <button
                            onclick={on_toggle_menu}
                            class="flex items-center space-x-2 px-3 py-2 rounded-lg hover:bg-gray-100 transition-colors"
                        >
                            <div class="w-8 h-8 bg-gray-200 rounded-full flex items-center justify-center text-sm font-medium text-gray-700">
                                {full_name.chars().next().unwrap_or('U')}
                            </div>
                            <span class="hidden md:block text-sm font-medium">{full_name.clone()}</span>
                        </button>

                        if *show_user_menu {
                            <div class="absolute right-0 mt-2 w-56 bg-white rounded-lg shadow-lg border border-gray-200 z-50">
                                <div class="py-2">
                                    <div class="px-4 py-2 border-b border-gray-100">
                                        <p class="text-sm font-medium text-gray-900">{full_name}</p>
                                        <p class="text-xs text-gray-500">{email}</p>
                                        <span class="inline-block mt-1 px-2 py-0.5 text-xs bg-gray-100 text-gray-700 rounded">
                                            {user_type}
                                        </span>
                                    </div>
                                    <button
                                        onclick={on_logout}
                                        class="w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-50"
                                    >
                                        {"Sign out"}
                                    </button>
                                    <button
                                        onclick={on_logout_all}
                                        class="w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-red-50"
                                    >
                                        {"Sign out everywhere"}
                                    </button>
                                </div>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </header>
    }
}
