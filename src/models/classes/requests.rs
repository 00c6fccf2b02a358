use serde::Deserialize;
use ts_rs::TS;

use super::entities::ClassStatus;
use crate::models::common::pagination::{PageParams, PageQuery};
use crate::models::common::patch::nullable_field;

// 班级列表查询参数（来自HTTP请求）
//
// `subject` 为学科 ID（解析失败时丢弃），`teacher` 为教师用户 ID 精确匹配。
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
}

// 班级创建请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub subject_id: i64,
    pub teacher_id: String,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<ClassStatus>,
}

// 班级更新请求
//
// description 为三态字段：缺省不修改，显式 null 清空
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub subject_id: Option<i64>,
    pub teacher_id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable_field")]
    #[ts(optional, type = "string | null")]
    pub description: Option<Option<String>>,
    pub capacity: Option<i32>,
    pub status: Option<ClassStatus>,
    #[ts(type = "unknown[] | null")]
    pub schedules: Option<Vec<serde_json::Value>>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct ClassListQuery {
    pub page: PageParams,
    pub search: Option<String>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<String>,
}

impl From<&ClassListParams> for ClassListQuery {
    fn from(params: &ClassListParams) -> Self {
        Self {
            page: PageParams::from(&params.page),
            search: params.search.clone(),
            subject_id: params.subject.as_deref().and_then(|s| s.trim().parse().ok()),
            teacher_id: params.teacher.clone(),
        }
    }
}
