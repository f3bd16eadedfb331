//! SQLite repository implementations

mod rule_repository_impl;
mod setting_store_impl;

pub use rule_repository_impl::SqliteRuleRepository;
pub use setting_store_impl::SqliteSettingStore;
