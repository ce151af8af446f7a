//! Bank statistics panel.
//!
//! Refreshes three ways: a visibility-aware polling interval, in-page
//! custom events dispatched by the management views, and cross-tab
//! broadcast hints. All three funnel into the same fetch.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use nexabank_frontend_common::config::AdminRefreshConfig;
use nexabank_frontend_common::events::{self, AdminChannel};
use nexabank_frontend_common::portal_client;
use nexabank_http::types::BankStats;
use web_sys::VisibilityState;
use yew::prelude::*;

use crate::components::customer::format_currency;

#[function_component(AdminStats)]
pub fn admin_stats() -> Html {
    let stats = use_state(BankStats::default);
    let is_loading = use_state(|| true);
    let last_updated = use_state(|| Option::<String>::None);

    let fetch = {
        let stats = stats.clone();
        let is_loading = is_loading.clone();
        let last_updated = last_updated.clone();

        Callback::from(move |()| {
            let stats = stats.clone();
            let is_loading = is_loading.clone();
            let last_updated = last_updated.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = match portal_client() {
                    Ok(client) => client.bank_stats(js_sys::Date::now() as u64).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(fresh) => {
                        stats.set(fresh);
                        let now: String = js_sys::Date::new_0()
                            .to_locale_time_string("en-US")
                            .into();
                        last_updated.set(Some(now));
                    }
                    Err(err) => {
                        // Keep the previous figures on screen.
                        tracing::warn!("failed to fetch bank stats: {err}");
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

            // In-page refresh hints from the management views.
            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                for name in [
                    events::dom::USER_CREATED,
                    events::dom::USER_UPDATED,
                    events::dom::USER_DELETED,
                    events::dom::ACCOUNT_CREATED,
                    events::dom::ACCOUNT_UPDATED,
                ] {
                    let fetch = fetch.clone();
                    listeners.push(EventListener::new(&window, name, move |_| fetch.emit(())));
                }
            }

            // Cross-tab hints; missing BroadcastChannel support is silently
            // tolerated and polling is unchanged.
            let channel = {
                let fetch = fetch.clone();
                AdminChannel::subscribe(move |kind| {
                    if events::is_refresh_hint(&kind) {
                        fetch.emit(());
                    }
                })
            };

            // Poll faster while visible, slower when hidden.
            let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let start_polling = {
                let interval = interval.clone();
                let fetch = fetch.clone();
                move || {
                    let visible = web_sys::window()
                        .and_then(|w| w.document())
                        .map(|d| d.visibility_state() == VisibilityState::Visible)
                        .unwrap_or(false);
                    let cadence = if visible {
                        AdminRefreshConfig::POLL_VISIBLE_MS
                    } else {
                        AdminRefreshConfig::POLL_HIDDEN_MS
                    };
                    let fetch = fetch.clone();
                    *interval.borrow_mut() = Some(Interval::new(cadence, move || fetch.emit(())));
                }
            };
            start_polling();
            let visibility_listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "visibilitychange", move |_| start_polling())
            });

            move || {
                drop(listeners);
                drop(channel);
                drop(visibility_listener);
                interval.borrow_mut().take();
            }
        });
    }

    let on_refresh = {
        let fetch = fetch.clone();
        Callback::from(move |_: MouseEvent| fetch.emit(()))
    };

    let cards: [(&str, String); 8] = [
        ("Total Users", stats.total_users.to_string()),
        ("Active Users", stats.active_users.to_string()),
        ("Locked Users", stats.locked_users.to_string()),
        ("Customers", stats.total_customers.to_string()),
        (
            "Staff",
            (stats.total_admins + stats.total_employees).to_string(),
        ),
        ("Accounts", stats.total_accounts.to_string()),
        ("Total Deposits", format_currency(stats.total_deposits)),
        (
            "Transaction Volume",
            format_currency(stats.total_transaction_volume),
        ),
    ];

    html! {
        <div class="bg-white rounded-lg shadow-sm border p-6">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-semibold text-gray-900">{"Bank Overview"}</h2>
                <div class="flex items-center gap-3">
                    if let Some(updated) = &*last_updated {
                        <span class="text-xs text-gray-500">
                            {format!("Last updated {updated}")}
                        </span>
                    }
                    <button
                        onclick={on_refresh}
                        disabled={*is_loading}
                        class="text-sm text-blue-600 hover:underline disabled:opacity-50"
                    >
                        {if *is_loading { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {for cards.iter().map(|(label, value)| html! {
                    <div class="border border-gray-200 rounded-lg p-4">
                        <p class="text-xs text-gray-500 mb-1">{*label}</p>
                        <p class="text-xl font-bold text-gray-900">{value.clone()}</p>
                    </div>
                })}
            </div>

            <p class="text-xs text-gray-400 mt-3">
                {format!("{} transactions processed in total", stats.total_transactions)}
            </p>
        </div>
    }
}
