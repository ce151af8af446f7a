//! Registration form.
//!
//! A successful registration yields the same session as a login and follows
//! the same hand-off path out of this application.

use std::collections::BTreeMap;

use nexabank_frontend_common::auth::{use_session, SessionAction};
use nexabank_frontend_common::services::AuthApiService;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::validation::{validate, RegisterForm};

fn field(
    id: &'static str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: String,
    oninput: Callback<InputEvent>,
    errors: &BTreeMap<&'static str, &'static str>,
) -> Html {
    let error = errors.get(id).copied();
    let class = if error.is_some() {
        "w-full px-3 py-2 border border-red-500 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
    } else {
        "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
    };

    html! {
        <div>
            <label for={id} class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input {id} type={input_type.to_string()} placeholder={placeholder.to_string()}
                {value} {oninput} {class} />
            if let Some(error) = error {
                <p class="text-red-500 text-sm mt-1">{error}</p>
            }
        </div>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let form = use_state(RegisterForm::default);
    let errors = use_state(BTreeMap::<&'static str, &'static str>::new);
    let server_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    // One binder per field; validation reruns only on submit.
    let bind = {
        let form = form.clone();
        move |apply: fn(&mut RegisterForm, String)| {
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
        let errors = errors.clone();
        let server_error = server_error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate(&form);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(BTreeMap::new());

            let request = form.to_request();
            let session = session.clone();
            let server_error = server_error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);
            server_error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().register(request).await {
                    Ok(auth) => {
                        session.dispatch(SessionAction::Login(auth));
                    }
                    Err(message) => {
                        tracing::warn!("registration failed: {message}");
                        server_error.set(Some(message));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let errors = (*errors).clone();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 py-12 px-4">
            <div class="max-w-2xl mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">{"Create your account"}</h1>
                    <p class="text-gray-600">{"Join NexaBank in a few minutes"}</p>
                </div>

                <div class="bg-white rounded-lg shadow-lg p-8">
                    if let Some(message) = &*server_error {
                        <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                            {message}
                        </div>
                    }

                    <form onsubmit={on_submit} class="space-y-4">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field("firstName", "First Name", "text", "Enter your first name",
                                form.first_name.clone(), bind(|f, v| f.first_name = v), &errors)}
                            {field("lastName", "Last Name", "text", "Enter your last name",
                                form.last_name.clone(), bind(|f, v| f.last_name = v), &errors)}
                        </div>

                        {field("email", "Email", "email", "Enter your email",
                            form.email.clone(), bind(|f, v| f.email = v), &errors)}

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field("password", "Password", "password", "Enter your password",
                                form.password.clone(), bind(|f, v| f.password = v), &errors)}
                            {field("confirmPassword", "Confirm Password", "password", "Confirm your password",
                                form.confirm_password.clone(), bind(|f, v| f.confirm_password = v), &errors)}
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field("phoneNumber", "Phone Number", "tel", "10-digit mobile number",
                                form.phone_number.clone(), bind(|f, v| f.phone_number = v), &errors)}
                            {field("dateOfBirth", "Date of Birth", "date", "YYYY-MM-DD",
                                form.date_of_birth.clone(), bind(|f, v| f.date_of_birth = v), &errors)}
                        </div>

                        {field("address", "Address (optional)", "text", "Street address",
                            form.address.clone(), bind(|f, v| f.address = v), &errors)}

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {field("city", "City (optional)", "text", "City",
                                form.city.clone(), bind(|f, v| f.city = v), &errors)}
                            {field("state", "State (optional)", "text", "State",
                                form.state.clone(), bind(|f, v| f.state = v), &errors)}
                            {field("postalCode", "Postal Code (optional)", "text", "6-digit code",
                                form.postal_code.clone(), bind(|f, v| f.postal_code = v), &errors)}
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field("aadharNumber", "Aadhar Number (optional)", "text", "12-digit number",
                                form.aadhar_number.clone(), bind(|f, v| f.aadhar_number = v), &errors)}
                            {field("panNumber", "PAN Number (optional)", "text", "AAAAA9999A",
                                form.pan_number.clone(), bind(|f, v| f.pan_number = v), &errors)}
                        </div>

                        <button
                            type="submit"
                            disabled={*is_submitting}
                            class="w-full bg-blue-600 text-white py-2 rounded-lg font-medium hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            if *is_submitting {
                                {"Creating account..."}
                            } else {
                                {"Create Account"}
                            }
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm text-gray-600">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                            {"Sign in"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
