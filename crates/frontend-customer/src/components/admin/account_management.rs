//! Account management: filterable account list with status control.

use nexabank_frontend_common::{events, portal_client};
use nexabank_http::types::{AccountStatus, AccountType, AdminBankAccount};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::customer::format_currency;

const TYPE_FILTERS: [(&str, Option<AccountType>); 5] = [
    ("ALL", None),
    ("SAVINGS", Some(AccountType::Savings)),
    ("CURRENT", Some(AccountType::Current)),
    ("FIXED_DEPOSIT", Some(AccountType::FixedDeposit)),
    ("LOAN", Some(AccountType::Loan)),
];

const STATUS_FILTERS: [(&str, Option<AccountStatus>); 5] = [
    ("ALL", None),
    ("ACTIVE", Some(AccountStatus::Active)),
    ("INACTIVE", Some(AccountStatus::Inactive)),
    ("SUSPENDED", Some(AccountStatus::Suspended)),
    ("CLOSED", Some(AccountStatus::Closed)),
];

const STATUS_CHOICES: [AccountStatus; 4] = [
    AccountStatus::Active,
    AccountStatus::Inactive,
    AccountStatus::Suspended,
    AccountStatus::Closed,
];

#[function_component(AdminAccountManagement)]
pub fn admin_account_management() -> Html {
    let accounts = use_state(Vec::<AdminBankAccount>::new);
    let type_filter = use_state(|| Option::<AccountType>::None);
    let status_filter = use_state(|| Option::<AccountStatus>::None);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let fetch = {
        let accounts = accounts.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |(account_type, status): (Option<AccountType>, Option<AccountStatus>)| {
            let accounts = accounts.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match portal_client() {
                    Ok(client) => client.list_accounts(account_type, status).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(list) => {
                        accounts.set(list);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("Failed to load accounts: {err}"))),
                }
                is_loading.set(false);
            });
        })
    };

    // Refetch whenever a filter changes.
    {
        let fetch = fetch.clone();
        use_effect_with((*type_filter, *status_filter), move |(t, s)| {
            fetch.emit((*t, *s));
        });
    }

    let on_type_filter = {
        let type_filter = type_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let choice = TYPE_FILTERS
                .iter()
                .find(|(label, _)| *label == select.value())
                .and_then(|(_, value)| *value);
            type_filter.set(choice);
        })
    };

    let on_status_filter = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let choice = STATUS_FILTERS
                .iter()
                .find(|(label, _)| *label == select.value())
                .and_then(|(_, value)| *value);
            status_filter.set(choice);
        })
    };

    let on_status_change = {
        let fetch = fetch.clone();
        let error = error.clone();
        let type_filter = type_filter.clone();
        let status_filter = status_filter.clone();

        Callback::from(move |(account_id, status): (String, AccountStatus)| {
            let fetch = fetch.clone();
            let error = error.clone();
            let filters = (*type_filter, *status_filter);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match portal_client() {
                    Ok(client) => client.update_account_status(&account_id, status).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(_) => {
                        events::dispatch_dom_hint(events::dom::ACCOUNT_UPDATED);
                        events::broadcast_hint(events::hint::ACCOUNT_UPDATED);
                        fetch.emit(filters);
                    }
                    Err(err) => error.set(Some(format!("Failed to update account status: {err}"))),
                }
            });
        })
    };

    let select_class = "px-3 py-2 border border-gray-300 rounded-lg text-sm";

    html! {
        <div class="bg-white rounded-lg shadow-sm border p-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-4">
                <h2 class="text-lg font-semibold text-gray-900">{"Account Management"}</h2>
                <div class="flex items-center gap-3">
                    <select onchange={on_type_filter} class={select_class}>
                        {for TYPE_FILTERS.iter().map(|(label, value)| html! {
                            <option value={*label} selected={*type_filter == *value}>{*label}</option>
                        })}
                    </select>
                    <select onchange={on_status_filter} class={select_class}>
                        {for STATUS_FILTERS.iter().map(|(label, value)| html! {
                            <option value={*label} selected={*status_filter == *value}>{*label}</option>
                        })}
                    </select>
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
            } else if accounts.is_empty() {
                <p class="text-gray-600 text-sm">{"No accounts match the current filters."}</p>
            } else {
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-xs text-gray-500 border-b">
                                <th class="py-2 pr-4">{"Account"}</th>
                                <th class="py-2 pr-4">{"Owner"}</th>
                                <th class="py-2 pr-4">{"Type"}</th>
                                <th class="py-2 pr-4">{"Balance"}</th>
                                <th class="py-2">{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for accounts.iter().map(|account| {
                                account_row(account, on_status_change.clone())
                            })}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}

fn account_row(
    account: &AdminBankAccount,
    on_status_change: Callback<(String, AccountStatus)>,
) -> Html {
    let onchange = {
        let on_status_change = on_status_change.clone();
        let account_id = account.account_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = STATUS_CHOICES
                .iter()
                .copied()
                .find(|s| s.as_str() == select.value())
            {
                on_status_change.emit((account_id.clone(), status));
            }
        })
    };

    html! {
        <tr class="border-b last:border-0">
            <td class="py-2 pr-4 font-medium text-gray-900">{&account.account_number}</td>
            <td class="py-2 pr-4">
                <p class="text-gray-900">{&account.user_name}</p>
                <p class="text-xs text-gray-500">{&account.user_email}</p>
            </td>
            <td class="py-2 pr-4 text-gray-600">
                {account.account_type.as_str().replace('_', " ")}
            </td>
            <td class="py-2 pr-4 text-gray-900">{format_currency(account.balance)}</td>
            <td class="py-2">
                <select {onchange} class="px-2 py-1 border border-gray-300 rounded text-xs">
                    {for STATUS_CHOICES.iter().map(|status| html! {
                        <option value={status.as_str()} selected={account.status == *status}>
                            {status.as_str()}
                        </option>
                    })}
                </select>
            </td>
        </tr>
    }
}
