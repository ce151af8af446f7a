//! Recent transactions list.

use nexabank_frontend_common::portal_client;
use nexabank_http::types::{Transaction, TransactionStatus, TransactionType};
use yew::prelude::*;

use super::format_currency;

const HISTORY_LIMIT: usize = 10;

#[function_component(TransactionHistory)]
pub fn transaction_history() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let transactions = transactions.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let client = match portal_client() {
                    Ok(client) => client,
                    Err(err) => {
                        error.set(Some(format!("Failed to get client: {err}")));
                        is_loading.set(false);
                        return;
                    }
                };
                match client.my_transactions(HISTORY_LIMIT).await {
                    Ok(list) => {
                        transactions.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load transactions: {err}");
                        error.set(Some("Unable to load transactions right now".to_string()));
                    }
                }
                is_loading.set(false);
            });
        });
    }

    html! {
        <div class="bg-white rounded-lg shadow-sm border p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Recent Transactions"}</h2>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 bg-yellow-50 border border-yellow-200 text-yellow-800 rounded text-sm">
                    {message}
                </div>
            }

            if *is_loading {
                <div class="space-y-3">
                    {for (0..4).map(|_| html! {
                        <div class="h-12 bg-gray-100 rounded animate-pulse"></div>
                    })}
                </div>
            } else if transactions.is_empty() {
                <p class="text-gray-600 text-sm">{"No transactions yet."}</p>
            } else {
                <div class="divide-y divide-gray-100">
                    {for transactions.iter().map(transaction_row)}
                </div>
            }
        </div>
    }
}

fn transaction_row(transaction: &Transaction) -> Html {
    let incoming = matches!(
        transaction.transaction_type,
        TransactionType::Credit | TransactionType::TransferIn
    );
    let (sign, amount_class) = if incoming {
        ("+", "text-green-600")
    } else {
        ("-", "text-red-600")
    };

    let status_class = match transaction.status {
        TransactionStatus::Completed => "bg-green-100 text-green-700",
        TransactionStatus::Pending => "bg-yellow-100 text-yellow-700",
        TransactionStatus::Failed => "bg-red-100 text-red-700",
        TransactionStatus::Cancelled => "bg-gray-100 text-gray-600",
    };

    html! {
        <div class="flex items-center justify-between py-3">
            <div>
                <p class="text-sm font-medium text-gray-900">
                    {if transaction.description.is_empty() {
                        transaction.category.clone()
                    } else {
                        transaction.description.clone()
                    }}
                </p>
                <p class="text-xs text-gray-500">
                    {format!("{} · {}", transaction.created_at, transaction.reference_number)}
                </p>
            </div>
            <div class="text-right">
                <p class={format!("text-sm font-semibold {amount_class}")}>
                    {format!("{sign}{}", format_currency(transaction.amount))}
                </p>
                <span class={format!("px-2 py-0.5 text-xs rounded {status_class}")}>
                    {transaction.status.as_str()}
                </span>
            </div>
        </div>
    }
}
