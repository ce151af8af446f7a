//! Role-routed dashboard of the classic application.

use nexabank_frontend_common::auth::{use_session, SessionAction};
use nexabank_frontend_common::components::{dashboard_for, Dashboard};
use nexabank_frontend_common::portal_client;
use nexabank_frontend_common::services::AuthApiService;
use nexabank_http::types::{BankAccount, BankStats, Transaction, TransactionType, User};
use yew::prelude::*;

fn format_currency(amount: f64) -> String {
    format!("₹{amount:.2}")
}

#[function_component(ClassicDashboard)]
pub fn classic_dashboard() -> Html {
    let session = use_session();
    let user = session.user.clone();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = AuthApiService::new().logout().await {
                    tracing::warn!("logout call failed: {err}");
                }
                session.dispatch(SessionAction::Logout);
            });
        })
    };

    let (name, user_type) = match &user {
        Some(user) => (
            format!("{} {}", user.first_name, user.last_name),
            Some(user.user_type),
        ),
        None => (String::new(), None),
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-5xl mx-auto px-4 h-14 flex items-center justify-between">
                    <span class="font-bold text-gray-900">{"NexaBank"}</span>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-gray-600">{name}</span>
                        <button
                            onclick={on_logout}
                            class="text-sm text-blue-600 hover:underline"
                        >
                            {"Sign out"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-4 py-8">
                {match dashboard_for(user_type) {
                    Dashboard::Admin => html! { <AdminView /> },
                    Dashboard::Customer => html! { <CustomerView /> },
                }}
            </main>
        </div>
    }
}

#[function_component(CustomerView)]
fn customer_view() -> Html {
    let accounts = use_state(Vec::<BankAccount>::new);
    let transactions = use_state(Vec::<Transaction>::new);
    let is_loading = use_state(|| true);

    {
        let accounts = accounts.clone();
        let transactions = transactions.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(client) = portal_client() {
                    match client.my_accounts().await {
                        Ok(list) => accounts.set(list),
                        Err(err) => tracing::warn!("failed to load accounts: {err}"),
                    }
                    match client.my_transactions(5).await {
                        Ok(list) => transactions.set(list),
                        Err(err) => tracing::warn!("failed to load transactions: {err}"),
                    }
                }
                is_loading.set(false);
            });
        });
    }

    if *is_loading {
        return html! { <div class="h-40 bg-gray-100 rounded-lg animate-pulse"></div> };
    }

    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow-sm border p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Your Accounts"}</h2>
                if accounts.is_empty() {
                    <p class="text-sm text-gray-600">{"No accounts yet."}</p>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {for accounts.iter().map(|account| html! {
                            <div class="border border-gray-200 rounded-lg p-4">
                                <p class="text-xs text-gray-500">{&account.account_number}</p>
                                <p class="text-lg font-bold text-gray-900">
                                    {format_currency(account.balance)}
                                </p>
                            </div>
                        })}
                    </div>
                }
            </div>

            <div class="bg-white rounded-lg shadow-sm border p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Recent Transactions"}</h2>
                if transactions.is_empty() {
                    <p class="text-sm text-gray-600">{"No transactions yet."}</p>
                } else {
                    <div class="divide-y divide-gray-100">
                        {for transactions.iter().map(|t| {
                            let incoming = matches!(
                                t.transaction_type,
                                TransactionType::Credit | TransactionType::TransferIn
                            );
                            let class = if incoming { "text-green-600" } else { "text-red-600" };
                            let sign = if incoming { "+" } else { "-" };
                            html! {
                                <div class="flex justify-between py-2 text-sm">
                                    <span class="text-gray-700">{&t.description}</span>
                                    <span class={class}>
                                        {format!("{sign}{}", format_currency(t.amount))}
                                    </span>
                                </div>
                            }
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(AdminView)]
fn admin_view() -> Html {
    let stats = use_state(BankStats::default);
    let users = use_state(Vec::<User>::new);
    let is_loading = use_state(|| true);

    {
        let stats = stats.clone();
        let users = users.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(client) = portal_client() {
                    match client.bank_stats(js_sys::Date::now() as u64).await {
                        Ok(fresh) => stats.set(fresh),
                        Err(err) => tracing::warn!("failed to load stats: {err}"),
                    }
                    match client.list_users().await {
                        Ok(list) => users.set(list),
                        Err(err) => tracing::warn!("failed to load users: {err}"),
                    }
                }
                is_loading.set(false);
            });
        });
    }

    if *is_loading {
        return html! { <div class="h-40 bg-gray-100 rounded-lg animate-pulse"></div> };
    }

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div class="bg-white border rounded-lg p-4">
                    <p class="text-xs text-gray-500">{"Users"}</p>
                    <p class="text-xl font-bold">{stats.total_users}</p>
                </div>
                <div class="bg-white border rounded-lg p-4">
                    <p class="text-xs text-gray-500">{"Accounts"}</p>
                    <p class="text-xl font-bold">{stats.total_accounts}</p>
                </div>
                <div class="bg-white border rounded-lg p-4">
                    <p class="text-xs text-gray-500">{"Deposits"}</p>
                    <p class="text-xl font-bold">{format_currency(stats.total_deposits)}</p>
                </div>
                <div class="bg-white border rounded-lg p-4">
                    <p class="text-xs text-gray-500">{"Transactions"}</p>
                    <p class="text-xl font-bold">{stats.total_transactions}</p>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm border p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Users"}</h2>
                <div class="divide-y divide-gray-100">
                    {for users.iter().map(|user| html! {
                        <div class="flex justify-between py-2 text-sm">
                            <span class="text-gray-900">
                                {format!("{} {}", user.first_name, user.last_name)}
                            </span>
                            <span class="text-gray-500">{user.user_type.as_str()}</span>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
