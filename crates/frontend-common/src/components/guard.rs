//! Role-gated rendering.
//!
//! Authentication itself is handled at each application's root (an
//! unauthenticated visitor is sent to the login surface); the guard below
//! only decides whether an authenticated user may see a given route. An
//! unmet requirement blocks render with an explanatory message — it never
//! redirects.

use nexabank_http::types::{User, UserType};
use yew::prelude::*;

use crate::auth::use_session;

/// Dashboard variant selected for `/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Customer,
    Admin,
}

/// Route `/dashboard` by user type.
pub fn dashboard_for(user_type: Option<UserType>) -> Dashboard {
    match user_type {
        Some(UserType::Admin) => Dashboard::Admin,
        // Employees currently share the admin dashboard.
        Some(UserType::Employee) => Dashboard::Admin,
        Some(UserType::Customer) | None => Dashboard::Customer,
    }
}

/// Exact-match permission check: the user type must match when required,
/// and every named role string must be present in the user's role set.
pub fn permitted(user: &User, user_type: Option<UserType>, roles: &[String]) -> bool {
    if let Some(required) = user_type {
        if user.user_type != required {
            return false;
        }
    }
    roles.iter().all(|role| user.has_role(role))
}

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    pub children: Children,
    /// Required user type, e.g. `ADMIN` for `/admin/*`.
    #[prop_or_default]
    pub user_type: Option<UserType>,
    /// Named permission strings, all required.
    #[prop_or_default]
    pub roles: Vec<String>,
}

#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let session = use_session();

    match &session.user {
        None => html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Sign in required"}</h1>
                    <p class="text-gray-600">{"Please sign in to view this page."}</p>
                </div>
            </div>
        },
        Some(user) if permitted(user, props.user_type, &props.roles) => {
            html! { <>{props.children.clone()}</> }
        }
        Some(_) => html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <div class="text-center max-w-md">
                    <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Access restricted"}</h1>
                    <p class="text-gray-600">
                        {"Your account does not have permission to view this page."}
                    </p>
                </div>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_type: UserType, roles: &[&str]) -> User {
        serde_json::from_value(serde_json::json!({
            "userId": "u-1",
            "email": "t@nexabank.test",
            "firstName": "T",
            "lastName": "U",
            "phoneNumber": "",
            "userType": serde_json::to_value(user_type).unwrap(),
            "roles": roles,
        }))
        .unwrap()
    }

    #[test]
    fn dashboard_routing_by_user_type() {
        assert_eq!(dashboard_for(Some(UserType::Admin)), Dashboard::Admin);
        assert_eq!(dashboard_for(Some(UserType::Customer)), Dashboard::Customer);
        assert_eq!(dashboard_for(None), Dashboard::Customer);
        // Employees fall back onto the admin dashboard.
        assert_eq!(dashboard_for(Some(UserType::Employee)), Dashboard::Admin);
    }

    #[test]
    fn permission_strings_are_exact_matches() {
        let admin = user(UserType::Admin, &["ADMIN_FULL_ACCESS"]);
        assert!(permitted(&admin, Some(UserType::Admin), &[]));
        assert!(permitted(
            &admin,
            Some(UserType::Admin),
            &["ADMIN_FULL_ACCESS".into()]
        ));
        assert!(!permitted(
            &admin,
            Some(UserType::Admin),
            &["ADMIN_FULL".into()]
        ));
        assert!(!permitted(
            &admin,
            Some(UserType::Admin),
            &["ADMIN_FULL_ACCESS".into(), "ADMIN_REPORTS".into()]
        ));
    }

    #[test]
    fn employee_does_not_satisfy_an_admin_requirement() {
        let employee = user(UserType::Employee, &[]);
        assert!(!permitted(&employee, Some(UserType::Admin), &[]));
        assert!(permitted(&employee, Some(UserType::Employee), &[]));
    }
}
