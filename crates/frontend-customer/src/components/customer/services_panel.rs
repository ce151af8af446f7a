//! Static banking services panel.

use yew::prelude::*;

const SERVICES: [(&str, &str); 4] = [
    ("Fixed Deposits", "Lock in competitive rates from 6.5% p.a."),
    ("Personal Loans", "Pre-approved offers with instant disbursal"),
    ("Insurance", "Life, health and vehicle cover in one place"),
    ("Mutual Funds", "Start a SIP with as little as ₹500"),
];

#[function_component(ServicesPanel)]
pub fn services_panel() -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-sm border p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Banking Services"}</h3>
            <div class="space-y-4">
                {for SERVICES.iter().map(|(name, blurb)| html! {
                    <div class="border-b border-gray-100 last:border-0 pb-3 last:pb-0">
                        <p class="text-sm font-medium text-gray-900">{*name}</p>
                        <p class="text-xs text-gray-500">{*blurb}</p>
                    </div>
                })}
            </div>
        </div>
    }
}
