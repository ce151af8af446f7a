//! Login form.

use nexabank_frontend_common::auth::{use_session, SessionAction};
use nexabank_frontend_common::services::AuthApiService;
use nexabank_http::types::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember_me = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_remember_change = {
        let remember_me = remember_me.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remember_me.set(input.checked());
        })
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let remember_me = remember_me.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                remember_me: Some(*remember_me),
            };

            let session = session.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(request).await {
                    Ok(auth) => {
                        // The app shell owns the welcome screen and hand-off.
                        session.dispatch(SessionAction::Login(auth));
                    }
                    Err(message) => {
                        tracing::warn!("login failed: {message}");
                        error.set(Some(message));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <div class="w-12 h-12 bg-gradient-to-r from-blue-600 to-purple-700 rounded-lg flex items-center justify-center mx-auto mb-4">
                        <span class="text-white font-bold">{"NB"}</span>
                    </div>
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">{"NexaBank"}</h1>
                    <p class="text-gray-600">{"Sign in to your account"}</p>
                </div>

                <div class="bg-white rounded-lg shadow-lg p-8">
                    if let Some(message) = &*error {
                        <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                            {message}
                        </div>
                    }

                    <form onsubmit={on_submit} class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700 mb-1">
                                {"Email"}
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Enter your email"
                                value={(*email).clone()}
                                oninput={on_email_input}
                                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                            />
                        </div>

                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                                {"Password"}
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Enter your password"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                            />
                        </div>

                        <label class="flex items-center gap-2 text-sm text-gray-600">
                            <input
                                type="checkbox"
                                checked={*remember_me}
                                onchange={on_remember_change}
                            />
                            {"Remember me"}
                        </label>

                        <button
                            type="submit"
                            disabled={*is_submitting}
                            class="w-full bg-blue-600 text-white py-2 rounded-lg font-medium hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            if *is_submitting {
                                {"Signing in..."}
                            } else {
                                {"Sign In"}
                            }
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm text-gray-600">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                            {"Register"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
