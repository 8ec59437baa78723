use crate::config::TwilioConfig;
use crate::error::{AppError, AppResult};
use crate::external::VerificationProvider;
use crate::models::{Channel, VerificationStatus};
use crate::utils::mask_phone;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Error resource returned by the Twilio REST API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct TwilioErrorResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

/// Twilio Verify v2 client.
#[derive(Clone)]
pub struct TwilioVerifyService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioVerifyService {
    pub fn new(config: TwilioConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("otp-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn service_url(&self, service: &str, resource: &str) -> String {
        format!(
            "{}/v2/Services/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            service,
            resource
        )
    }

    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> AppResult<VerificationStatus> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<VerificationStatus>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::ExternalApiError(provider_error_message(status, &body)))
        }
    }
}

/// Prefers the provider's `message`, then the raw body, then the status line.
fn provider_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<TwilioErrorResponse>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("HTTP {status}"),
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyService {
    async fn create_verification(
        &self,
        service: &str,
        to: &str,
        channel: Channel,
    ) -> AppResult<VerificationStatus> {
        let url = self.service_url(service, "Verifications");
        let params = [("To", to), ("Channel", channel.as_str())];

        match self.post_form(&url, &params).await {
            Ok(verification) => {
                log::info!(
                    "Verification created: {}, channel: {}, status: {}",
                    mask_phone(to),
                    channel,
                    verification.status
                );
                Ok(verification)
            }
            Err(e) => {
                log::error!("Verification create failed: {}, Error: {}", mask_phone(to), e);
                Err(e)
            }
        }
    }

    async fn create_verification_check(
        &self,
        service: &str,
        to: &str,
        code: &str,
    ) -> AppResult<VerificationStatus> {
        let url = self.service_url(service, "VerificationCheck");
        let params = [("To", to), ("Code", code)];

        match self.post_form(&url, &params).await {
            Ok(check) => {
                log::info!(
                    "Verification check completed: {}, status: {}",
                    mask_phone(to),
                    check.status
                );
                Ok(check)
            }
            Err(e) => {
                log::error!("Verification check failed: {}, Error: {}", mask_phone(to), e);
                Err(e)
            }
        }
    }
}
