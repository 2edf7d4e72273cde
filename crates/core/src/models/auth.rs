use serde::{Deserialize, Serialize};

// ── Requests ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub phone_no: String,
    pub email: String,
}

/// OTP request keyed by username (account-recovery flow).
#[derive(Debug, Clone, Serialize)]
pub struct OtpUserRequest {
    pub username: String,
}

/// OTP validation keyed by username (account-recovery flow).
#[derive(Debug, Clone, Serialize)]
pub struct OtpUserValidateRequest {
    pub username: String,
    pub otp: String,
}

/// OTP request keyed by an action code (wallet-creation flow).
/// The two flows share the same endpoint family on the backend.
#[derive(Debug, Clone, Serialize)]
pub struct OtpCodeRequest {
    pub code: String,
}

/// OTP validation keyed by the received code plus the action code
/// (wallet-creation flow).
#[derive(Debug, Clone, Serialize)]
pub struct OtpCodeValidateRequest {
    pub id: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMoneyRequest {
    pub money_to_add: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    pub crypto_id: String,
    pub amount_invested: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellRequest {
    pub crypto_id: String,
    pub crypto_order_id: i64,
}

// ── Responses ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ message }` acknowledgement used by register, OTP, and
/// wallet-creation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
