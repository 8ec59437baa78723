use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Channel, VerificationStatus};

/// Remote verification capability: the provider owns code generation,
/// delivery, expiry and checking.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Starts a verification for `to` over `channel` under `service`.
    async fn create_verification(
        &self,
        service: &str,
        to: &str,
        channel: Channel,
    ) -> AppResult<VerificationStatus>;

    /// Checks `code` against the outstanding verification for `to`.
    async fn create_verification_check(
        &self,
        service: &str,
        to: &str,
        code: &str,
    ) -> AppResult<VerificationStatus>;
}
