//! Cache module - Redis backed setting store
//!
//! Lets several daemon instances share one monitoring switch.

pub mod redis_settings;


pub use redis_settings::{mask_url, RedisSettingStore};
