//! User management: list, search, create, lock/unlock, delete.
//!
//! Every successful mutation dispatches the matching in-page event and a
//! best-effort cross-tab hint so the stats panel (and other tabs) refetch.

use nexabank_frontend_common::{events, portal_client};
use nexabank_http::types::{CreateUserRequest, User, UserStatus, UserType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const TYPE_FILTERS: [&str; 4] = ["ALL", "CUSTOMER", "ADMIN", "EMPLOYEE"];

#[function_component(UserManagement)]
pub fn user_management() -> Html {
    let users = use_state(Vec::<User>::new);
    let search = use_state(String::new);
    let type_filter = use_state(|| "ALL".to_string());
    let is_loading = use_state(|| true);
    let show_create = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let fetch = {
        let users = users.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |()| {
            let users = users.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match portal_client() {
                    Ok(client) => client.list_users().await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(list) => {
                        users.set(list);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Failed to load users: {err}"))),
                }
                is_loading.set(false);
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| fetch.emit(()));
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_filter_change = {
        let type_filter = type_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            type_filter.set(select.value());
        })
    };

    // LOCKED toggles back to ACTIVE; anything else locks.
    let on_toggle_lock = {
        let fetch = fetch.clone();
        let error = error.clone();

        Callback::from(move |(user_id, status): (String, Option<UserStatus>)| {
            let next = if status == Some(UserStatus::Locked) {
                UserStatus::Active
            } else {
                UserStatus::Locked
            };
            let fetch = fetch.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match portal_client() {
                    Ok(client) => client.update_user_status(&user_id, next).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(_) => {
                        events::dispatch_dom_hint(events::dom::USER_UPDATED);
                        events::broadcast_hint(events::hint::USER_UPDATED);
                        fetch.emit(());
                    }
                    Err(err) => error.set(Some(format!("Failed to update user status: {err}"))),
                }
            });
        })
    };

    let on_delete = {
        let fetch = fetch.clone();
        let error = error.clone();

        Callback::from(move |user_id: String| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(
                        "Are you sure you want to delete this user? This action cannot be undone.",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let fetch = fetch.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match portal_client() {
                    Ok(client) => client.delete_user(&user_id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(_) => {
                        events::dispatch_dom_hint(events::dom::USER_DELETED);
                        events::broadcast_hint(events::hint::USER_DELETED);
                        fetch.emit(());
                    }
                    Err(err) => error.set(Some(format!("Failed to delete user: {err}"))),
                }
            });
        })
    };

    let on_created = {
        let fetch = fetch.clone();
        let show_create = show_create.clone();
        Callback::from(move |()| {
            show_create.set(false);
            fetch.emit(());
        })
    };

    let filtered: Vec<User> = users
        .iter()
        .filter(|user| {
            let term = search.to_lowercase();
            let matches_search = term.is_empty()
                || user.first_name.to_lowercase().contains(&term)
                || user.last_name.to_lowercase().contains(&term)
                || user.email.to_lowercase().contains(&term);
            let matches_type =
                *type_filter == "ALL" || user.user_type.as_str() == type_filter.as_str();
            matches_search && matches_type
        })
        .cloned()
        .collect();

    html! {
        <div class="bg-white rounded-lg shadow-sm border p-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-4">
                <h2 class="text-lg font-semibold text-gray-900">{"User Management"}</h2>
                <div class="flex items-center gap-3">
                    <input
                        type="text"
                        placeholder="Search by name or email"
                        value={(*search).clone()}
                        oninput={on_search_input}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <select
                        onchange={on_filter_change}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                    >
                        {for TYPE_FILTERS.iter().map(|t| html! {
                            <option value={*t} selected={*type_filter == *t}>{*t}</option>
                        })}
                    </select>
                    <button
                        onclick={{
                            let show_create = show_create.clone();
                            Callback::from(move |_: MouseEvent| show_create.set(true))
                        }}
                        class="px-4 py-2 bg-blue-600 text-white rounded-lg text-sm font-medium hover:bg-blue-700"
                    >
                        {"Add User"}
                    </button>
                </div>
            </div>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                    {message}
                </div>
            }

            if *is_loading {
                <div class="space-y-3">
                    {for (0..5).map(|_| html! {
                        <div class="h-10 bg-gray-100 rounded animate-pulse"></div>
                    })}
                </div>
            } else if filtered.is_empty() {
                <p class="text-gray-600 text-sm">{"No users match the current filters."}</p>
            } else {
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-xs text-gray-500 border-b">
                                <th class="py-2 pr-4">{"Name"}</th>
                                <th class="py-2 pr-4">{"Email"}</th>
                                <th class="py-2 pr-4">{"Type"}</th>
                                <th class="py-2 pr-4">{"Status"}</th>
                                <th class="py-2 pr-4">{"Last Login"}</th>
                                <th class="py-2">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for filtered.iter().map(|user| {
                                user_row(user, on_toggle_lock.clone(), on_delete.clone())
                            })}
                        </tbody>
                    </table>
                </div>
            }

            if *show_create {
                <CreateUserModal
                    on_close={{
                        let show_create = show_create.clone();
                        Callback::from(move |()| show_create.set(false))
                    }}
                    on_created={on_created}
                />
            }
        </div>
    }
}

fn user_row(
    user: &User,
    on_toggle_lock: Callback<(String, Option<UserStatus>)>,
    on_delete: Callback<String>,
) -> Html {
    let status = user.status;
    let locked = status == Some(UserStatus::Locked);
    let status_class = match status {
        Some(UserStatus::Active) => "bg-green-100 text-green-700",
        Some(UserStatus::Inactive) => "bg-gray-100 text-gray-600",
        Some(UserStatus::Locked) => "bg-red-100 text-red-700",
        None => "bg-gray-100 text-gray-600",
    };
    let type_class = match user.user_type {
        UserType::Admin => "bg-purple-100 text-purple-700",
        UserType::Employee => "bg-blue-100 text-blue-700",
        UserType::Customer => "bg-gray-100 text-gray-700",
    };

    let toggle = {
        let on_toggle_lock = on_toggle_lock.clone();
        let user_id = user.user_id.clone();
        Callback::from(move |_: MouseEvent| on_toggle_lock.emit((user_id.clone(), status)))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let user_id = user.user_id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(user_id.clone()))
    };

    html! {
        <tr class="border-b last:border-0">
            <td class="py-2 pr-4 font-medium text-gray-900">
                {format!("{} {}", user.first_name, user.last_name)}
            </td>
            <td class="py-2 pr-4 text-gray-600">{&user.email}</td>
            <td class="py-2 pr-4">
                <span class={format!("px-2 py-0.5 text-xs rounded {type_class}")}>
                    {user.user_type.as_str()}
                </span>
            </td>
            <td class="py-2 pr-4">
                <span class={format!("px-2 py-0.5 text-xs rounded {status_class}")}>
                    {status.map(|s| s.as_str()).unwrap_or("UNKNOWN")}
                </span>
            </td>
            <td class="py-2 pr-4 text-gray-500">
                {user.last_login.clone().unwrap_or_else(|| "Never".to_string())}
            </td>
            <td class="py-2">
                <div class="flex gap-2">
                    <button onclick={toggle} class="text-xs text-blue-600 hover:underline">
                        {if locked { "Unlock" } else { "Lock" }}
                    </button>
                    <button onclick={delete} class="text-xs text-red-600 hover:underline">
                        {"Delete"}
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct CreateUserModalProps {
    on_close: Callback<()>,
    on_created: Callback<()>,
}

#[function_component(CreateUserModal)]
fn create_user_modal(props: &CreateUserModalProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let phone_number = use_state(String::new);
    let user_type = use_state(|| UserType::Customer);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_type_change = {
        let user_type = user_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let choice = match select.value().as_str() {
                "ADMIN" => UserType::Admin,
                "EMPLOYEE" => UserType::Employee,
                _ => UserType::Customer,
            };
            user_type.set(choice);
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let phone_number = phone_number.clone();
        let user_type = user_type.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() || password.is_empty() || first_name.is_empty() {
                error.set(Some("Email, password and first name are required".to_string()));
                return;
            }

            let request = CreateUserRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                phone_number: (*phone_number).clone(),
                user_type: *user_type,
                date_of_birth: None,
                address: None,
                city: None,
                state: None,
                country: None,
                postal_code: None,
                aadhar_number: None,
                pan_number: None,
            };

            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let on_created = on_created.clone();
            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match portal_client() {
                    Ok(client) => client.create_user(request).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(_) => {
                        events::dispatch_dom_hint(events::dom::USER_CREATED);
                        events::broadcast_hint(events::hint::USER_CREATED);
                        on_created.emit(());
                    }
                    Err(err) => {
                        error.set(Some(format!("Failed to create user: {err}")));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm \
                       focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Create User"}</h3>

                if let Some(message) = &*error {
                    <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                        {message}
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-3">
                    <div class="grid grid-cols-2 gap-3">
                        <input type="text" placeholder="First name" class={input_class}
                            value={(*first_name).clone()} oninput={text_input(&first_name)} />
                        <input type="text" placeholder="Last name" class={input_class}
                            value={(*last_name).clone()} oninput={text_input(&last_name)} />
                    </div>
                    <input type="email" placeholder="Email" class={input_class}
                        value={(*email).clone()} oninput={text_input(&email)} />
                    <input type="password" placeholder="Password" class={input_class}
                        value={(*password).clone()} oninput={text_input(&password)} />
                    <input type="tel" placeholder="Phone number" class={input_class}
                        value={(*phone_number).clone()} oninput={text_input(&phone_number)} />
                    <select onchange={on_type_change} class={input_class}>
                        {for [UserType::Customer, UserType::Admin, UserType::Employee].iter().map(|t| html! {
                            <option value={t.as_str()} selected={*user_type == *t}>{t.as_str()}</option>
                        })}
                    </select>

                    <div class="flex gap-3 pt-2">
                        <button
                            type="submit"
                            disabled={*is_submitting}
                            class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg text-sm font-medium hover:bg-blue-700 disabled:opacity-50"
                        >
                            {if *is_submitting { "Creating..." } else { "Create" }}
                        </button>
                        <button
                            type="button"
                            onclick={on_close}
                            class="flex-1 px-4 py-2 border border-gray-300 rounded-lg text-sm font-medium hover:bg-gray-50"
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
