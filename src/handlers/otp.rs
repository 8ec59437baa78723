use actix_web::{HttpResponse, ResponseError, Result, error::JsonPayloadError, web};

use crate::error::AppError;
use crate::models::*;
use crate::services::VerificationService;

#[utoipa::path(
    post,
    path = "/send-otp",
    tag = "otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "Verification started", body = OtpStatusResponse),
        (status = 400, description = "Body is malformed JSON", body = ErrorResponse),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
pub async fn send_otp(
    verification_service: web::Data<VerificationService>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse> {
    match verification_service
        .send_code(request.phone.as_deref())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/verify-otp",
    tag = "otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Provider check status", body = OtpStatusResponse),
        (status = 400, description = "Body is malformed JSON", body = ErrorResponse),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
pub async fn verify_otp(
    verification_service: web::Data<VerificationService>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse> {
    match verification_service
        .check_code(request.phone.as_deref(), request.code.as_deref())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

// A body that is not sent as JSON carries no fields, so it fails like `{}`.
fn json_error(err: JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::ContentType => AppError::MissingParameter("to"),
        err => AppError::InvalidBody(err.to_string()),
    }
}

pub fn otp_config(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| json_error(err).into());

    cfg.app_data(json_config)
        .route("/send-otp", web::post().to(send_otp))
        .route("/verify-otp", web::post().to(verify_otp));
}
