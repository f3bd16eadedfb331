use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_shared::utils::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::{InboundSmsRequest, TwilioInboundForm};
use crate::handlers::ApiError;

const EMPTY_TWIML: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Response></Response>"#;

/// Handler for POST /api/v1/inbound
///
/// Runs the forwarding engine for one message and returns its report.
///
/// # Request Body
///
/// ```json
/// { "sender": "BANK", "body": "Balance: $10" }
/// ```
///
/// # Response
///
/// 200 with the report for any accepted message, including when monitoring
/// is off or the rule store could not be read. 400 if the body is invalid.
pub async fn receive_sms(
    state: web::Data<AppState>,
    request: web::Json<InboundSmsRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    tracing::info!(
        sender = %mask_phone_number(&request.sender),
        length = request.body.chars().count(),
        event = "sms_received",
        "Inbound SMS received"
    );

    let report = state
        .forwarding
        .handle_inbound_message(&request.sender, &request.body)
        .await;

    Ok(HttpResponse::Ok().json(report))
}

/// Handler for POST /api/v1/inbound/twilio
///
/// Accepts Twilio's form-encoded messaging webhook and replies with empty
/// TwiML so Twilio sends no reply of its own.
pub async fn receive_twilio_sms(
    state: web::Data<AppState>,
    form: web::Form<TwilioInboundForm>,
) -> HttpResponse {
    let form = form.into_inner();

    tracing::info!(
        sender = %mask_phone_number(&form.from),
        length = form.body.chars().count(),
        event = "sms_received",
        source = "twilio",
        "Inbound SMS received"
    );

    let report = state.forwarding.handle_inbound_message(&form.from, &form.body).await;
    tracing::debug!(
        matched = report.matched_count(),
        forwarded = report.forwarded_count(),
        "Twilio webhook processed"
    );

    HttpResponse::Ok()
        .content_type("application/xml")
        .body(EMPTY_TWIML)
}
