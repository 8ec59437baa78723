use utoipa::OpenApi;

use crate::handlers;
use crate::models::*;

/// OpenAPI description of the gateway's HTTP surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::otp::send_otp,
        handlers::otp::verify_otp,
    ),
    components(
        schemas(
            SendOtpRequest,
            VerifyOtpRequest,
            OtpStatusResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "otp", description = "One-time code API"),
    ),
    info(
        title = "OTP Gateway API",
        version = "0.1.0",
        description = "Forwards one-time code requests to the verification provider"
    )
)]
pub struct ApiDoc;
