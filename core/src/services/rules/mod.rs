//! Rule management service
//!
//! Create, edit, toggle and delete forwarding rules. Drafts are trimmed and
//! validated here before they reach the rule store.

mod service;


pub use service::RuleService;
