//! Open a new account.

use nexabank_frontend_common::{events, portal_client};
use nexabank_http::types::AccountType;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const ACCOUNT_TYPES: [AccountType; 4] = [
    AccountType::Savings,
    AccountType::Current,
    AccountType::FixedDeposit,
    AccountType::Loan,
];

#[function_component(AccountManagement)]
pub fn account_management() -> Html {
    let selected = use_state(|| AccountType::Savings);
    let is_submitting = use_state(|| false);
    let message = use_state(|| Option::<Result<String, String>>::None);

    let on_type_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let choice = ACCOUNT_TYPES
                .iter()
                .copied()
                .find(|t| t.as_str() == select.value())
                .unwrap_or(AccountType::Savings);
            selected.set(choice);
        })
    };

    let on_open = {
        let selected = selected.clone();
        let is_submitting = is_submitting.clone();
        let message = message.clone();

        Callback::from(move |_: MouseEvent| {
            let account_type = *selected;
            let is_submitting = is_submitting.clone();
            let message = message.clone();
            is_submitting.set(true);
            message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match portal_client() {
                    Ok(client) => client.create_account(account_type).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(account) => {
                        message.set(Some(Ok(format!(
                            "Opened {} account {}",
                            account.account_type.as_str().replace('_', " "),
                            account.account_number
                        ))));
                        // Let the summary (and other tabs) refetch.
                        events::dispatch_dom_hint(events::dom::ACCOUNT_CREATED);
                        events::broadcast_hint(events::hint::ACCOUNT_CREATED);
                    }
                    Err(err) => {
                        tracing::warn!("account creation failed: {err}");
                        message.set(Some(Err(format!("Could not open the account: {err}"))));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div id="open-account" class="bg-white rounded-lg shadow-sm border p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Open a New Account"}</h2>

            if let Some(result) = &*message {
                {match result {
                    Ok(text) => html! {
                        <div class="mb-4 p-3 bg-green-50 border border-green-200 text-green-700 rounded text-sm">
                            {text}
                        </div>
                    },
                    Err(text) => html! {
                        <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                            {text}
                        </div>
                    },
                }}
            }

            <div class="flex items-end gap-4">
                <div class="flex-1">
                    <label for="account-type" class="block text-sm font-medium text-gray-700 mb-1">
                        {"Account type"}
                    </label>
                    <select
                        id="account-type"
                        onchange={on_type_change}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    >
                        {for ACCOUNT_TYPES.iter().map(|t| html! {
                            <option value={t.as_str()} selected={*selected == *t}>
                                {t.as_str().replace('_', " ")}
                            </option>
                        })}
                    </select>
                </div>
                <button
                    onclick={on_open}
                    disabled={*is_submitting}
                    class="px-6 py-2 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 transition-colors disabled:opacity-50"
                >
                    {if *is_submitting { "Opening..." } else { "Open Account" }}
                </button>
            </div>
        </div>
    }
}
