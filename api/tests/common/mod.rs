//! Shared helpers for route tests

#![allow(dead_code)]

use std::sync::Arc;

use sf_api::AppState;
use sf_core::repositories::{InMemoryRuleRepository, InMemorySettingStore};
use sf_infra::sms::{MockSmsService, SmsTransportAdapter};
use sf_infra::Infrastructure;
use sf_shared::config::AppConfig;

pub struct TestBackends {
    pub state: AppState,
    pub sms: MockSmsService,
    pub rules: InMemoryRuleRepository,
    pub settings: InMemorySettingStore,
}

/// In-memory stores and a mock provider whose internals stay reachable
pub fn backends() -> TestBackends {
    let sms = MockSmsService::new();
    let rules = InMemoryRuleRepository::new();
    let settings = InMemorySettingStore::new();

    let adapter = SmsTransportAdapter::new(Arc::new(sms.clone()));
    let infrastructure = Infrastructure {
        rules: Arc::new(rules.clone()),
        settings: Arc::new(settings.clone()),
        transport: Arc::new(adapter.clone()),
        sms: adapter,
        database: None,
    };

    TestBackends {
        state: AppState::new(infrastructure, &AppConfig::default()),
        sms,
        rules,
        settings,
    }
}
