//! Admin dashboard: statistics plus the management views.

use nexabank_frontend_common::auth::use_session;
use yew::prelude::*;

use crate::components::admin::{AdminAccountManagement, AdminStats, UserManagement};
use crate::components::layout::BankingHeader;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Users,
    Accounts,
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let session = use_session();
    let active_tab = use_state(|| Tab::Users);

    let first_name = session
        .user
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    let tab_button = |tab: Tab, label: &str| {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == tab;
        let class = if is_active {
            "px-4 py-2 text-sm font-medium text-blue-600 border-b-2 border-blue-600"
        } else {
            "px-4 py-2 text-sm font-medium text-gray-600 hover:text-gray-900"
        };
        let onclick = Callback::from(move |_: MouseEvent| active_tab.set(tab));
        html! { <button {class} {onclick}>{label.to_string()}</button> }
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <BankingHeader />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">
                        {format!("Welcome, {first_name}")}
                    </h1>
                    <p class="text-gray-600">{"Bank administration and oversight."}</p>
                </div>

                <div class="mb-8">
                    <AdminStats />
                </div>

                <div class="mb-4 border-b border-gray-200">
                    {tab_button(Tab::Users, "Users")}
                    {tab_button(Tab::Accounts, "Accounts")}
                </div>

                {match *active_tab {
                    Tab::Users => html! { <UserManagement /> },
                    Tab::Accounts => html! { <AdminAccountManagement /> },
                }}
            </main>
        </div>
    }
}
