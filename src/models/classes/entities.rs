use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum ClassStatus {
    Active,   // 开放
    Inactive, // 停用
    Archived, // 归档
}

impl<'de> Deserialize<'de> for ClassStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(ClassStatus::Active),
            "inactive" => Ok(ClassStatus::Inactive),
            "archived" => Ok(ClassStatus::Archived),
            _ => Err(serde::de::Error::custom(format!(
                "无效的班级状态: '{s}'. 支持的状态: active, inactive, archived"
            ))),
        }
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassStatus::Active => write!(f, "active"),
            ClassStatus::Inactive => write!(f, "inactive"),
            ClassStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ClassStatus::Active),
            "inactive" => Ok(ClassStatus::Inactive),
            "archived" => Ok(ClassStatus::Archived),
            _ => Err(format!("Invalid class status: {s}")),
        }
    }
}

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub subject_id: i64,
    pub teacher_id: String,
    pub invite_code: String,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub status: ClassStatus,
    #[ts(type = "unknown[]")]
    pub schedules: Vec<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
