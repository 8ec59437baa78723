use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery channel requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Fields are optional so an absent value reaches the provider layer
// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SendOtpRequest {
    #[serde(default)]
    #[schema(example = "+15551234567")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[schema(example = "+15551234567")]
    pub phone: Option<String>,
    #[serde(default)]
    #[schema(example = "123456")]
    pub code: Option<String>,
}

/// Body of every successful response: the provider status, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OtpStatusResponse {
    #[schema(example = "pending")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// The part of a provider verification resource the gateway reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub status: String,
    #[serde(default)]
    pub sid: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub valid: Option<bool>,
}

impl From<VerificationStatus> for OtpStatusResponse {
    fn from(verification: VerificationStatus) -> Self {
        Self {
            status: verification.status,
        }
    }
}
