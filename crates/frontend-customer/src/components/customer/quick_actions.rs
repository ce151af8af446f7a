//! Quick action buttons on the customer dashboard.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

fn coming_soon(feature: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!("{feature} feature coming soon!"));
    }
}

#[function_component(QuickActions)]
pub fn quick_actions() -> Html {
    let navigator = use_navigator();

    let on_transfer = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Transfers);
        }
    });
    let on_add_money = Callback::from(|_: MouseEvent| coming_soon("Add money"));
    let on_pay_bills = Callback::from(|_: MouseEvent| coming_soon("Bill payment"));

    let action_class = "flex flex-col items-center gap-2 p-4 bg-white border border-gray-200 \
                        rounded-lg hover:border-blue-300 hover:shadow-sm transition-all";

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <button onclick={on_transfer} class={action_class}>
                <span class="text-2xl">{"↗"}</span>
                <span class="text-sm font-medium text-gray-700">{"Transfer Money"}</span>
            </button>
            <button onclick={on_add_money} class={action_class}>
                <span class="text-2xl">{"＋"}</span>
                <span class="text-sm font-medium text-gray-700">{"Add Money"}</span>
            </button>
            <button onclick={on_pay_bills} class={action_class}>
                <span class="text-2xl">{"⌁"}</span>
                <span class="text-sm font-medium text-gray-700">{"Pay Bills"}</span>
            </button>
            <a href="#open-account" class={action_class}>
                <span class="text-2xl">{"◎"}</span>
                <span class="text-sm font-medium text-gray-700">{"New Account"}</span>
            </a>
        </div>
    }
}
