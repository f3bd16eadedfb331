use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::domain::{RuleDraft, RuleId};

use crate::app::AppState;
use crate::dto::{RuleListResponse, RuleRequest, RuleResponse, SetEnabledRequest};
use crate::handlers::ApiError;

/// Handler for GET /api/v1/rules
///
/// Every rule, enabled or not, in stored order.
pub async fn list_rules(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let rules = state.rules.list().await?;
    Ok(HttpResponse::Ok().json(RuleListResponse::from(rules)))
}

/// Handler for POST /api/v1/rules
///
/// # Request Body
///
/// ```json
/// {
///     "sender_number": "BANK",
///     "sender_exact_match": true,
///     "message_content": null,
///     "forward_to_number": "+15551234567",
///     "is_enabled": true
/// }
/// ```
///
/// 201 with the stored rule, 400 when the destination is missing or invalid.
pub async fn create_rule(
    state: web::Data<AppState>,
    request: web::Json<RuleRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let rule = state.rules.create(RuleDraft::from(request)).await?;
    Ok(HttpResponse::Created().json(RuleResponse::from(&rule)))
}

/// Handler for GET /api/v1/rules/{id}
pub async fn get_rule(state: web::Data<AppState>, path: web::Path<RuleId>) -> Result<HttpResponse, ApiError> {
    let rule = state.rules.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RuleResponse::from(&rule)))
}

/// Handler for PUT /api/v1/rules/{id}
///
/// Replaces every editable field. Omitted optional fields are cleared.
pub async fn update_rule(
    state: web::Data<AppState>,
    path: web::Path<RuleId>,
    request: web::Json<RuleRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let rule = state
        .rules
        .update(path.into_inner(), RuleDraft::from(request))
        .await?;
    Ok(HttpResponse::Ok().json(RuleResponse::from(&rule)))
}

/// Handler for PUT /api/v1/rules/{id}/enabled
pub async fn set_rule_enabled(
    state: web::Data<AppState>,
    path: web::Path<RuleId>,
    request: web::Json<SetEnabledRequest>,
) -> Result<HttpResponse, ApiError> {
    let rule = state
        .rules
        .set_enabled(path.into_inner(), request.enabled)
        .await?;
    Ok(HttpResponse::Ok().json(RuleResponse::from(&rule)))
}

/// Handler for DELETE /api/v1/rules/{id}
pub async fn delete_rule(state: web::Data<AppState>, path: web::Path<RuleId>) -> Result<HttpResponse, ApiError> {
    state.rules.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
