//! Route handlers
//!
//! - `/health`: liveness
//! - `/api/v1/inbound`: inbound SMS webhooks
//! - `/api/v1/rules`: forwarding rule management
//! - `/api/v1/monitoring`: the global monitoring switch

pub mod health;
pub mod inbound;
pub mod monitoring;
pub mod rules;

use actix_web::{web, HttpResponse};

use sf_shared::{error_codes, ErrorResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/inbound")
                        .route("", web::post().to(inbound::receive_sms))
                        .route("/twilio", web::post().to(inbound::receive_twilio_sms)),
                )
                .service(
                    web::scope("/rules")
                        .route("", web::get().to(rules::list_rules))
                        .route("", web::post().to(rules::create_rule))
                        .route("/{id}", web::get().to(rules::get_rule))
                        .route("/{id}", web::put().to(rules::update_rule))
                        .route("/{id}", web::delete().to(rules::delete_rule))
                        .route("/{id}/enabled", web::put().to(rules::set_rule_enabled)),
                )
                .service(
                    web::resource("/monitoring")
                        .route(web::get().to(monitoring::get_monitoring))
                        .route(web::put().to(monitoring::set_monitoring)),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
