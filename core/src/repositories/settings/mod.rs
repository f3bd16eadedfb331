//! Setting store module for persisted boolean preferences.

mod r#trait;
pub use r#trait::SettingStore;

mod memory;
pub use memory::InMemorySettingStore;
