use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::VerificationProvider;
use crate::models::*;

/// Binds a provider client to the configured service identity and the
/// fixed delivery channel.
#[derive(Clone)]
pub struct VerificationService {
    provider: Arc<dyn VerificationProvider>,
    service_sid: String,
    channel: Channel,
}

impl VerificationService {
    pub fn new(provider: Arc<dyn VerificationProvider>, service_sid: impl Into<String>) -> Self {
        Self {
            provider,
            service_sid: service_sid.into(),
            channel: Channel::Sms,
        }
    }

    pub async fn send_code(&self, phone: Option<&str>) -> AppResult<OtpStatusResponse> {
        let to = required("to", phone)?;

        let verification = self
            .provider
            .create_verification(&self.service_sid, to, self.channel)
            .await?;

        Ok(verification.into())
    }

    pub async fn check_code(
        &self,
        phone: Option<&str>,
        code: Option<&str>,
    ) -> AppResult<OtpStatusResponse> {
        let to = required("to", phone)?;
        let code = required("code", code)?;

        let check = self
            .provider
            .create_verification_check(&self.service_sid, to, code)
            .await?;

        Ok(check.into())
    }
}

// Absent parameters fail before any provider round trip, the same way the
// provider's own client library refuses to build the request.
fn required<'a>(name: &'static str, value: Option<&'a str>) -> AppResult<&'a str> {
    value.ok_or(AppError::MissingParameter(name))
}
