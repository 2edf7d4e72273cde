use std::env;
use std::path::PathBuf;

use crate::errors::ClientError;

const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SESSION_DIR: &str = ".crypto-sim";

/// Runtime configuration, supplied via environment variables.
///
/// The backend base URL is deliberately never hardcoded — deployments
/// point the client at staging or production through the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the first-party REST backend.
    pub api_base_url: String,

    /// Base URL of the optional external prediction service.
    /// The service being down is an expected condition, not an error.
    pub predict_base_url: String,

    /// Directory where the session (identity + credential) is persisted.
    pub session_dir: PathBuf,
}

impl ClientConfig {
    /// Read configuration from the environment.
    /// `CRYPTO_SIM_API_URL` is required; everything else has defaults.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_base_url = env::var("CRYPTO_SIM_API_URL")
            .map_err(|_| ClientError::Config("CRYPTO_SIM_API_URL must be set".into()))?;

        let predict_base_url = env::var("CRYPTO_SIM_PREDICT_URL")
            .unwrap_or_else(|_| DEFAULT_PREDICT_URL.into());

        let session_dir = env::var("CRYPTO_SIM_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                env::var("HOME")
                    .map(|h| PathBuf::from(h).join(DEFAULT_SESSION_DIR))
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_DIR))
            });

        Ok(Self {
            api_base_url,
            predict_base_url,
            session_dir,
        })
    }

    /// Build a configuration with explicit values (tests, embedders).
    pub fn new(
        api_base_url: impl Into<String>,
        predict_base_url: impl Into<String>,
        session_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            predict_base_url: predict_base_url.into(),
            session_dir: session_dir.into(),
        }
    }
}
