//! Money transfer wizard.
//!
//! Three steps: details, review, confirmation. Submission is still a
//! simulated flow — the transfer endpoint is not live yet — but the source
//! accounts are real.

use gloo::timers::callback::Timeout;
use nexabank_frontend_common::portal_client;
use nexabank_http::types::BankAccount;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::customer::format_currency;
use crate::components::layout::BankingHeader;

const TRANSFER_PURPOSES: [&str; 6] = [
    "Family Support",
    "Bill Payment",
    "Rent",
    "Education",
    "Investment",
    "Other",
];

const PROCESSING_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Details,
    Review,
    Done,
}

#[function_component(TransferPage)]
pub fn transfer_page() -> Html {
    let step = use_state(|| Step::Details);
    let accounts = use_state(Vec::<BankAccount>::new);
    let from_account = use_state(String::new);
    let to_account = use_state(String::new);
    let amount = use_state(String::new);
    let purpose = use_state(|| TRANSFER_PURPOSES[0].to_string());
    let error = use_state(|| Option::<String>::None);
    let is_processing = use_state(|| false);

    {
        let accounts = accounts.clone();
        let from_account = from_account.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(client) = portal_client() {
                    match client.my_accounts().await {
                        Ok(list) => {
                            if let Some(first) = list.first() {
                                from_account.set(first.account_id.clone());
                            }
                            accounts.set(list);
                        }
                        Err(err) => tracing::warn!("failed to load accounts for transfer: {err}"),
                    }
                }
            });
        });
    }

    let on_from_change = {
        let from_account = from_account.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            from_account.set(select.value());
        })
    };
    let on_to_input = {
        let to_account = to_account.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            to_account.set(input.value());
        })
    };
    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let on_purpose_change = {
        let purpose = purpose.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            purpose.set(select.value());
        })
    };

    let parsed_amount = amount.parse::<f64>().ok().filter(|a| *a > 0.0);

    let on_review = {
        let step = step.clone();
        let error = error.clone();
        let from_account = from_account.clone();
        let to_account = to_account.clone();
        let parsed = parsed_amount;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if from_account.is_empty() {
                error.set(Some("Select a source account".to_string()));
            } else if to_account.trim().is_empty() {
                error.set(Some("Enter a destination account number".to_string()));
            } else if parsed.is_none() {
                error.set(Some("Enter a valid amount".to_string()));
            } else {
                error.set(None);
                step.set(Step::Review);
            }
        })
    };

    let on_back = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(Step::Details))
    };

    let on_confirm = {
        let step = step.clone();
        let is_processing = is_processing.clone();
        Callback::from(move |_: MouseEvent| {
            let step = step.clone();
            let is_processing = is_processing.clone();
            is_processing.set(true);
            Timeout::new(PROCESSING_DELAY_MS, move || {
                is_processing.set(false);
                step.set(Step::Done);
            })
            .forget();
        })
    };

    let from = accounts
        .iter()
        .find(|account| account.account_id == *from_account)
        .cloned();

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-lg \
                       focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <div class="min-h-screen bg-gray-50">
            <BankingHeader />

            <main class="max-w-2xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Transfer Money"}</h1>

                {step_indicator(*step)}

                if let Some(message) = &*error {
                    <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm">
                        {message}
                    </div>
                }

                <div class="bg-white rounded-lg shadow-sm border p-6">
                    {match *step {
                        Step::Details => html! {
                            <form onsubmit={on_review} class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">
                                        {"From account"}
                                    </label>
                                    <select onchange={on_from_change} class={input_class}>
                                        {for accounts.iter().map(|account| html! {
                                            <option
                                                value={account.account_id.clone()}
                                                selected={account.account_id == *from_account}
                                            >
                                                {format!(
                                                    "{} · {}",
                                                    account.account_number,
                                                    format_currency(account.balance)
                                                )}
                                            </option>
                                        })}
                                    </select>
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">
                                        {"To account number"}
                                    </label>
                                    <input type="text" class={input_class}
                                        placeholder="Beneficiary account number"
                                        value={(*to_account).clone()} oninput={on_to_input} />
                                </div>

                                <div class="grid grid-cols-2 gap-4">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-1">
                                            {"Amount"}
                                        </label>
                                        <input type="number" min="1" step="0.01" class={input_class}
                                            placeholder="0.00"
                                            value={(*amount).clone()} oninput={on_amount_input} />
                                    </div>
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-1">
                                            {"Purpose"}
                                        </label>
                                        <select onchange={on_purpose_change} class={input_class}>
                                            {for TRANSFER_PURPOSES.iter().map(|p| html! {
                                                <option value={*p} selected={*purpose == *p}>{*p}</option>
                                            })}
                                        </select>
                                    </div>
                                </div>

                                <button
                                    type="submit"
                                    class="w-full bg-blue-600 text-white py-2 rounded-lg font-medium hover:bg-blue-700"
                                >
                                    {"Review Transfer"}
                                </button>
                            </form>
                        },
                        Step::Review => html! {
                            <div class="space-y-4">
                                <dl class="space-y-2 text-sm">
                                    <div class="flex justify-between">
                                        <dt class="text-gray-600">{"From"}</dt>
                                        <dd class="font-medium text-gray-900">
                                            {from.as_ref().map(|a| a.account_number.clone()).unwrap_or_default()}
                                        </dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-gray-600">{"To"}</dt>
                                        <dd class="font-medium text-gray-900">{(*to_account).clone()}</dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-gray-600">{"Amount"}</dt>
                                        <dd class="font-medium text-gray-900">
                                            {parsed_amount.map(format_currency).unwrap_or_default()}
                                        </dd>
                                    </div>
                                    <div class="flex justify-between">
                                        <dt class="text-gray-600">{"Purpose"}</dt>
                                        <dd class="font-medium text-gray-900">{(*purpose).clone()}</dd>
                                    </div>
                                </dl>

                                <div class="flex gap-3">
                                    <button
                                        onclick={on_back}
                                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg font-medium hover:bg-gray-50"
                                    >
                                        {"Back"}
                                    </button>
                                    <button
                                        onclick={on_confirm}
                                        disabled={*is_processing}
                                        class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 disabled:opacity-50"
                                    >
                                        {if *is_processing { "Processing..." } else { "Confirm Transfer" }}
                                    </button>
                                </div>
                            </div>
                        },
                        Step::Done => html! {
                            <div class="text-center py-8">
                                <div class="w-12 h-12 bg-green-100 text-green-600 rounded-full flex items-center justify-center mx-auto mb-4 text-2xl">
                                    {"✓"}
                                </div>
                                <h2 class="text-xl font-semibold text-gray-900 mb-2">
                                    {"Transfer Successful"}
                                </h2>
                                <p class="text-gray-600 text-sm">
                                    {format!(
                                        "Your transfer of {} has been processed successfully.",
                                        parsed_amount.map(format_currency).unwrap_or_default()
                                    )}
                                </p>
                            </div>
                        },
                    }}
                </div>

                <p class="text-xs text-gray-500 mt-4">
                    {"IMPS transfers are processed instantly and are available 24/7, including weekends and holidays."}
                </p>
            </main>
        </div>
    }
}

fn step_indicator(step: Step) -> Html {
    let steps = [
        (Step::Details, "Details"),
        (Step::Review, "Review"),
        (Step::Done, "Done"),
    ];
    let position = |s: Step| steps.iter().position(|(v, _)| *v == s).unwrap_or(0);
    let current = position(step);

    html! {
        <div class="flex items-center gap-2 mb-6">
            {for steps.iter().enumerate().map(|(i, (_, label))| {
                let class = if i <= current {
                    "px-3 py-1 text-xs font-medium bg-blue-600 text-white rounded-full"
                } else {
                    "px-3 py-1 text-xs font-medium bg-gray-200 text-gray-600 rounded-full"
                };
                html! {
                    <>
                        <span {class}>{*label}</span>
                        if i < steps.len() - 1 {
                            <span class="flex-1 h-px bg-gray-200"></span>
                        }
                    </>
                }
            })}
        </div>
    }
}
