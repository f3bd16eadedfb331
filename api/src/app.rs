//! Application state and factory
//!
//! This module wires the infrastructure into the services shared by all
//! workers and registers the routes on an Actix-web application.

use std::sync::Arc;

use actix_web::web;

use sf_core::services::{ForwardingService, ForwardingServiceConfig, MonitoringControl, RuleService};
use sf_infra::Infrastructure;
use sf_shared::config::AppConfig;

use crate::handlers::{json_error_handler, path_error_handler};
use crate::routes;

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub rules: RuleService,
    pub monitoring: MonitoringControl,
    pub forwarding: Arc<ForwardingService>,
    pub infrastructure: Infrastructure,
}

impl AppState {
    /// Build the services on top of already initialized infrastructure
    pub fn new(infrastructure: Infrastructure, config: &AppConfig) -> Self {
        let monitoring = MonitoringControl::from_config(infrastructure.settings.clone(), &config.settings);
        let forwarding = ForwardingService::new(
            infrastructure.rules.clone(),
            infrastructure.transport.clone(),
            monitoring.clone(),
            ForwardingServiceConfig::from(&config.forwarding),
        );

        Self {
            rules: RuleService::new(infrastructure.rules.clone()),
            monitoring,
            forwarding: Arc::new(forwarding),
            infrastructure,
        }
    }

    pub fn sms_provider(&self) -> &str {
        self.infrastructure.sms_provider()
    }
}

/// Register state, JSON handling and every route
///
/// Used by the server and by the route tests.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler));
        routes::configure(cfg);
    }
}
