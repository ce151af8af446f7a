//! Role-based dashboard selection for `/dashboard`.

use nexabank_frontend_common::auth::use_session;
use nexabank_frontend_common::components::{dashboard_for, Dashboard};
use yew::prelude::*;

use super::{AdminDashboard, CustomerDashboard};

#[function_component(DashboardRouter)]
pub fn dashboard_router() -> Html {
    let session = use_session();
    let user_type = session.user.as_ref().map(|user| user.user_type);

    match dashboard_for(user_type) {
        Dashboard::Admin => html! { <AdminDashboard /> },
        Dashboard::Customer => html! { <CustomerDashboard /> },
    }
}
