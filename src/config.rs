//! Upload credential loading.
//!
//! Credentials come from the process environment, normally populated from a
//! `.env` file in the working directory. The file is optional; the variables
//! are not.

use anyhow::{Context, Result};

/// Static AWS credentials for the upload pass.
#[derive(Clone)]
pub struct UploadConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl UploadConfig {
    /// Load credentials from the environment, reading `.env` first when one
    /// exists. Missing variables are an error.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let access_key_id =
            std::env::var("AWS_ACCESS_KEY_ID").context("AWS_ACCESS_KEY_ID is not set")?;
        let secret_access_key =
            std::env::var("AWS_SECRET_ACCESS_KEY").context("AWS_SECRET_ACCESS_KEY is not set")?;

        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }
}
