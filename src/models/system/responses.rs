use serde::Serialize;
use ts_rs::TS;

// 健康检查响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: "down".to_string(),
        }
    }
}
