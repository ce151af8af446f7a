//! Pages of the Customer application

pub mod admin_dashboard;
pub mod customer_dashboard;
pub mod dashboard;
pub mod transfer;

pub use admin_dashboard::AdminDashboard;
pub use customer_dashboard::CustomerDashboard;
pub use dashboard::DashboardRouter;
pub use transfer::TransferPage;
