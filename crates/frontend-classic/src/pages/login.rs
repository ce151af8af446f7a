//! Login form of the classic application.

use nexabank_frontend_common::auth::{use_session, SessionAction};
use nexabank_frontend_common::services::AuthApiService;
use nexabank_http::types::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(ClassicLoginPage)]
pub fn classic_login_page() -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
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

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
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
                remember_me: None,
            };

            let session = session.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(request).await {
                    // The router notices the session and shows the dashboard.
                    Ok(auth) => session.dispatch(SessionAction::Login(auth)),
                    Err(message) => {
                        error.set(Some(message));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-sm w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">{"NexaBank"}</h1>

                if let Some(message) = &*error {
                    <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                        {message}
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full bg-blue-600 text-white py-2 rounded-lg font-medium hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *is_submitting { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="mt-4 text-center text-sm text-gray-600">
                    {"New to NexaBank? "}
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                        {"Create an account"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
