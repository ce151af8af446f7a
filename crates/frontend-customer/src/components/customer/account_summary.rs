//! Account summary cards.

use gloo::events::EventListener;
use nexabank_frontend_common::events;
use nexabank_frontend_common::portal_client;
use nexabank_http::types::{AccountStatus, BankAccount};
use yew::prelude::*;

use super::format_currency;

#[function_component(AccountSummary)]
pub fn account_summary() -> Html {
    let accounts = use_state(Vec::<BankAccount>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let show_balances = use_state(|| true);

    let fetch = {
        let accounts = accounts.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |()| {
            let accounts = accounts.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = match portal_client() {
                    Ok(client) => client,
                    Err(err) => {
                        error.set(Some(format!("Failed to get client: {err}")));
                        is_loading.set(false);
                        return;
                    }
                };
                match client.my_accounts().await {
                    Ok(list) => {
                        accounts.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load accounts: {err}");
                        // Keep whatever was rendered; the page stays up.
                        error.set(Some("Unable to load accounts right now".to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(());

            // Refetch when an account is opened elsewhere on the page.
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, events::dom::ACCOUNT_CREATED, move |_| {
                    fetch.emit(());
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_balances = {
        let show_balances = show_balances.clone();
        Callback::from(move |_: MouseEvent| show_balances.set(!*show_balances))
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm border p-6">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-semibold text-gray-900">{"Your Accounts"}</h2>
                <button
                    onclick={on_toggle_balances}
                    class="text-sm text-blue-600 hover:underline"
                >
                    {if *show_balances { "Hide balances" } else { "Show balances" }}
                </button>
            </div>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 bg-yellow-50 border border-yellow-200 text-yellow-800 rounded text-sm">
                    {message}
                </div>
            }

            if *is_loading {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {for (0..3).map(|_| html! {
                        <div class="h-28 bg-gray-100 rounded-lg animate-pulse"></div>
                    })}
                </div>
            } else if accounts.is_empty() {
                <p class="text-gray-600 text-sm">{"No accounts yet. Open one below to get started."}</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {for accounts.iter().map(|account| account_card(account, *show_balances))}
                </div>
            }
        </div>
    }
}

fn account_card(account: &BankAccount, show_balance: bool) -> Html {
    let balance = if show_balance {
        format_currency(account.balance)
    } else {
        "••••••".to_string()
    };

    let status_class = match account.status {
        AccountStatus::Active => "bg-green-100 text-green-700",
        AccountStatus::Inactive => "bg-gray-100 text-gray-600",
        AccountStatus::Suspended => "bg-yellow-100 text-yellow-700",
        AccountStatus::Closed => "bg-red-100 text-red-700",
    };

    html! {
        <div class="border border-gray-200 rounded-lg p-4">
            <div class="flex justify-between items-start mb-2">
                <span class="text-sm font-medium text-gray-700">
                    {account.account_type.as_str().replace('_', " ")}
                </span>
                <span class={format!("px-2 py-0.5 text-xs rounded {status_class}")}>
                    {account.status.as_str()}
                </span>
            </div>
            <p class="text-xs text-gray-500 mb-2">{&account.account_number}</p>
            <p class="text-xl font-bold text-gray-900">{balance}</p>
            if account.interest_rate > 0.0 {
                <p class="text-xs text-gray-500 mt-1">
                    {format!("{:.2}% interest", account.interest_rate)}
                </p>
            }
        </div>
    }
}
