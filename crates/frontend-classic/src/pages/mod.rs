//! Pages of the classic application

pub mod dashboard;
pub mod login;
pub mod register;

pub use dashboard::ClassicDashboard;
pub use login::ClassicLoginPage;
pub use register::ClassicRegisterPage;
