//! Wire types shared by both NexaBank services.

use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;

/// JSON envelope wrapping every request and response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: String,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning a `success=false` envelope into an error
    /// even when it arrived with an HTTP 2xx status.
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Api(self.message));
        }
        self.data
            .ok_or_else(|| ClientError::Api("response envelope carried no data".into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Customer,
    Admin,
    Employee,
}

impl UserType {
    /// The wire spelling, also used for display badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Admin => "ADMIN",
            Self::Employee => "EMPLOYEE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Locked,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Locked => "LOCKED",
        }
    }
}

/// The authenticated user as both services report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub user_type: UserType,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub masked_aadhar: Option<String>,
    #[serde(default)]
    pub masked_pan: Option<String>,
}

impl User {
    /// Exact-match lookup against the server-issued role strings.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Token pair plus user summary issued by login, register and refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

/// Admin-initiated user creation; unlike registration the user type is
/// mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
}

/// Partial user update for `PUT /admin/users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Savings,
    Current,
    FixedDeposit,
    Loan,
}

impl AccountType {
    /// The query-parameter spelling the app service expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "SAVINGS",
            Self::Current => "CURRENT",
            Self::FixedDeposit => "FIXED_DEPOSIT",
            Self::Loan => "LOAN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
    Closed,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Closed => "CLOSED",
        }
    }
}

/// An account as the owner sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub account_id: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub balance: f64,
    pub status: AccountStatus,
    #[serde(default)]
    pub interest_rate: f64,
    pub created_at: String,
    #[serde(default)]
    pub last_transaction_date: Option<String>,
}

/// An account as the admin views list it, with owner identity attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBankAccount {
    pub account_id: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub balance: f64,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub status: AccountStatus,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Credit,
    Debit,
    TransferIn,
    TransferOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub transaction_type: TransactionType,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub balance_after: f64,
    #[serde(default)]
    pub reference_number: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub category: String,
    pub created_at: String,
    #[serde(default)]
    pub processed_at: Option<String>,
}

/// Aggregate figures rendered on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStats {
    pub total_users: u64,
    pub total_customers: u64,
    pub total_admins: u64,
    pub total_employees: u64,
    pub active_users: u64,
    pub locked_users: u64,
    pub total_accounts: u64,
    pub total_deposits: f64,
    pub total_transactions: u64,
    pub total_transaction_volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_data_on_success() {
        let envelope: ApiEnvelope<u32> = serde_json::from_str(
            r#"{"success":true,"message":"ok","data":7,"timestamp":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(envelope.into_data().unwrap(), 7);
    }

    #[test]
    fn envelope_failure_surfaces_message_even_with_data() {
        let envelope: ApiEnvelope<u32> = serde_json::from_str(
            r#"{"success":false,"message":"account locked","data":7,"timestamp":""}"#,
        )
        .unwrap();
        match envelope.into_data() {
            Err(ClientError::Api(message)) => assert_eq!(message, "account locked"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn user_round_trips_wire_casing() {
        let json = r#"{
            "userId":"u-1","email":"a@b.c","firstName":"Ada","lastName":"L",
            "phoneNumber":"555","userType":"ADMIN","status":"ACTIVE",
            "roles":["ADMIN_FULL_ACCESS"]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_type, UserType::Admin);
        assert!(user.has_role("ADMIN_FULL_ACCESS"));
        assert!(!user.has_role("ADMIN_FULL"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["userId"], "u-1");
        assert_eq!(back["userType"], "ADMIN");
    }

    #[test]
    fn account_type_query_spelling_matches_wire() {
        assert_eq!(AccountType::FixedDeposit.as_str(), "FIXED_DEPOSIT");
        let parsed: AccountType = serde_json::from_str("\"FIXED_DEPOSIT\"").unwrap();
        assert_eq!(parsed, AccountType::FixedDeposit);
    }
}
