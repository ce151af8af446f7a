//! Customer dashboard.

use nexabank_frontend_common::auth::use_session;
use yew::prelude::*;

use crate::components::customer::{
    AccountManagement, AccountSummary, QuickActions, ServicesPanel, TransactionHistory,
};
use crate::components::layout::BankingHeader;

#[function_component(CustomerDashboard)]
pub fn customer_dashboard() -> Html {
    let session = use_session();
    let first_name = session
        .user
        .as_ref()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gray-50">
            <BankingHeader />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">
                        {format!("Welcome back, {first_name}!")}
                    </h1>
                    <p class="text-gray-600">
                        {"Here's an overview of your banking activity and accounts."}
                    </p>
                </div>

                <div class="mb-8">
                    <QuickActions />
                </div>

                <div class="mb-8">
                    <AccountSummary />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-8">
                        <TransactionHistory />
                        <AccountManagement />
                    </div>

                    <div class="space-y-6">
                        <ServicesPanel />

                        <div class="bg-white rounded-lg shadow-sm border p-6">
                            <h3 class="text-lg font-semibold mb-4">{"This Month"}</h3>
                            <p class="text-xs text-gray-500 mb-4 italic">
                                {"Monthly summary is not wired to live data yet."}
                            </p>
                            <div class="space-y-4">
                                <div class="flex justify-between items-center">
                                    <span class="text-sm text-gray-600">{"Income"}</span>
                                    <span class="text-sm font-medium text-green-600">{"—"}</span>
                                </div>
                                <div class="flex justify-between items-center">
                                    <span class="text-sm text-gray-600">{"Expenses"}</span>
                                    <span class="text-sm font-medium text-red-600">{"—"}</span>
                                </div>
                                <div class="flex justify-between items-center">
                                    <span class="text-sm text-gray-600">{"Savings"}</span>
                                    <span class="text-sm font-medium text-blue-600">{"—"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
