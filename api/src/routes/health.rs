use actix_web::{web, HttpResponse};

use crate::app::AppState;

/// Handler for GET /health
///
/// Always answers 200. A monitoring flag that cannot be read is reported
/// as `null`, an unreachable database as `"database": "unavailable"`.
/// `sms_available` is the provider's own availability check.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let monitoring = state.monitoring.is_enabled().await.ok();
    let database = match state.infrastructure.health_check().await {
        Ok(true) => "ok",
        _ => "unavailable",
    };
    let sms_available = state.infrastructure.sms.is_available().await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sms-forwarder",
        "version": env!("CARGO_PKG_VERSION"),
        "sms_provider": state.sms_provider(),
        "sms_available": sms_available,
        "monitoring_enabled": monitoring,
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
