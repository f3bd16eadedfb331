//! Request and response bodies

pub mod inbound_dto;
pub mod monitoring_dto;
pub mod rule_dto;

pub use inbound_dto::{InboundSmsRequest, TwilioInboundForm};
pub use monitoring_dto::{MonitoringRequest, MonitoringResponse};
pub use rule_dto::{RuleListResponse, RuleRequest, RuleResponse, SetEnabledRequest};
