pub mod rule;
pub mod settings;

pub use rule::{InMemoryRuleRepository, RuleRepository};
pub use settings::{InMemorySettingStore, SettingStore};
