use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringResponse {
    pub enabled: bool,
    /// Rules that would currently take part in matching
    pub enabled_rules: usize,
}
