use std::sync::Arc;

use crate::errors::ClientError;
use crate::gateway::ApiGateway;
use crate::models::auth::{
    LoginRequest, LoginResponse, MessageResponse, OtpCodeRequest, OtpCodeValidateRequest,
    OtpUserRequest, OtpUserValidateRequest, RegisterRequest,
};

/// Authentication and OTP endpoints.
///
/// The OTP endpoint family serves two flows with different payload
/// shapes: one keyed by username (account recovery) and one keyed by an
/// action code (wallet creation). Both are exposed as distinct named
/// operations against the same paths.
pub struct AuthApi {
    gateway: Arc<ApiGateway>,
}

impl AuthApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `POST /login` — exchanges credentials for a bearer token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.gateway.post("/login", &body).await
    }

    /// `POST /prelogin/register` — creates a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        self.gateway.post("/prelogin/register", request).await
    }

    /// `POST /otp/generateOtp` with a username payload.
    pub async fn generate_otp(&self, username: &str) -> Result<MessageResponse, ClientError> {
        let body = OtpUserRequest {
            username: username.to_string(),
        };
        self.gateway.post("/otp/generateOtp", &body).await
    }

    /// `POST /otp/generateOtp` with the wallet-creation action code.
    pub async fn generate_wallet_otp(&self) -> Result<MessageResponse, ClientError> {
        let body = OtpCodeRequest {
            code: "CREATE_WALLET".to_string(),
        };
        self.gateway.post("/otp/generateOtp", &body).await
    }

    /// `POST /otp/validateOtp` with a username payload.
    pub async fn validate_otp(
        &self,
        username: &str,
        otp: &str,
    ) -> Result<MessageResponse, ClientError> {
        let body = OtpUserValidateRequest {
            username: username.to_string(),
            otp: otp.to_string(),
        };
        self.gateway.post("/otp/validateOtp", &body).await
    }

    /// `POST /otp/validateOtp` with the wallet-creation action code.
    pub async fn validate_wallet_otp(&self, otp: &str) -> Result<MessageResponse, ClientError> {
        let body = OtpCodeValidateRequest {
            id: otp.to_string(),
            code: "CREATE_WALLET".to_string(),
        };
        self.gateway.post("/otp/validateOtp", &body).await
    }
}
