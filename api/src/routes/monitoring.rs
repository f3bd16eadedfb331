use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{MonitoringRequest, MonitoringResponse};
use crate::handlers::ApiError;

async fn monitoring_response(state: &AppState, enabled: bool) -> Result<MonitoringResponse, ApiError> {
    let enabled_rules = state.rules.list_enabled().await?.len();
    Ok(MonitoringResponse { enabled, enabled_rules })
}

/// Handler for GET /api/v1/monitoring
pub async fn get_monitoring(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let enabled = state.monitoring.is_enabled().await?;
    Ok(HttpResponse::Ok().json(monitoring_response(&state, enabled).await?))
}

/// Handler for PUT /api/v1/monitoring
///
/// Persists the flag. The next inbound message sees the new value.
pub async fn set_monitoring(
    state: web::Data<AppState>,
    request: web::Json<MonitoringRequest>,
) -> Result<HttpResponse, ApiError> {
    let enabled = state.monitoring.set_enabled(request.enabled).await?;
    Ok(HttpResponse::Ok().json(monitoring_response(&state, enabled).await?))
}
