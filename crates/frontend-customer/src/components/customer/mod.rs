//! Customer-facing dashboard components

pub mod account_management;
pub mod account_summary;
pub mod quick_actions;
pub mod services_panel;
pub mod transaction_history;

pub use account_management::AccountManagement;
pub use account_summary::AccountSummary;
pub use quick_actions::QuickActions;
pub use services_panel::ServicesPanel;
pub use transaction_history::TransactionHistory;

/// Currency formatting used across the banking views.
pub fn format_currency(amount: f64) -> String {
    format!("₹{amount:.2}")
}
