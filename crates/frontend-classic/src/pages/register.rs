//! Registration form of the classic application.

use nexabank_frontend_common::auth::{use_session, SessionAction};
use nexabank_frontend_common::services::AuthApiService;
use nexabank_http::types::RegisterRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Clone, Default, PartialEq)]
struct Form {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone_number: String,
}

#[function_component(ClassicRegisterPage)]
pub fn classic_register_page() -> Html {
    let session = use_session();
    let form = use_state(Form::default);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let bind = {
        let form = form.clone();
        move |apply: fn(&mut Form, String)| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            })
        }
    };

    let on_submit = {
        let session = session.clone();
        let form = form.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if form.email.is_empty()
                || form.password.is_empty()
                || form.first_name.is_empty()
                || form.last_name.is_empty()
            {
                error.set(Some("All fields except phone are required".to_string()));
                return;
            }
            if form.password != form.confirm_password {
                error.set(Some("Passwords don't match".to_string()));
                return;
            }

            let request = RegisterRequest {
                email: form.email.trim().to_string(),
                password: form.password.clone(),
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                phone_number: form.phone_number.trim().to_string(),
                ..RegisterRequest::default()
            };

            let session = session.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().register(request).await {
                    Ok(auth) => session.dispatch(SessionAction::Login(auth)),
                    Err(message) => {
                        error.set(Some(message));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-lg \
                       focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4 py-8">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">{"Create account"}</h1>

                if let Some(message) = &*error {
                    <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                        {message}
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <input type="text" placeholder="First name" class={input_class}
                            value={form.first_name.clone()} oninput={bind(|f, v| f.first_name = v)} />
                        <input type="text" placeholder="Last name" class={input_class}
                            value={form.last_name.clone()} oninput={bind(|f, v| f.last_name = v)} />
                    </div>
                    <input type="email" placeholder="Email" class={input_class}
                        value={form.email.clone()} oninput={bind(|f, v| f.email = v)} />
                    <input type="password" placeholder="Password" class={input_class}
                        value={form.password.clone()} oninput={bind(|f, v| f.password = v)} />
                    <input type="password" placeholder="Confirm password" class={input_class}
                        value={form.confirm_password.clone()} oninput={bind(|f, v| f.confirm_password = v)} />
                    <input type="tel" placeholder="Phone number" class={input_class}
                        value={form.phone_number.clone()} oninput={bind(|f, v| f.phone_number = v)} />

                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full bg-blue-600 text-white py-2 rounded-lg font-medium hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *is_submitting { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="mt-4 text-center text-sm text-gray-600">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
