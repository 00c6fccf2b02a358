use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单对象响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct DataBody<T: TS> {
    pub data: T,
}

impl<T: TS> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// 错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
