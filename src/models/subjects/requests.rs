use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::{PageParams, PageQuery};
use crate::models::common::patch::nullable_field;

// 学科列表查询参数（来自HTTP请求）
//
// `department` 按院系名称做模糊匹配（跨表过滤）。
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub department: Option<String>,
}

// 学科创建请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub department_id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

// 学科更新请求
//
// description 为三态字段：缺省不修改，显式 null 清空
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub department_id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "nullable_field")]
    #[ts(optional, type = "string | null")]
    pub description: Option<Option<String>>,
}

// 学科列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct SubjectListQuery {
    pub page: PageParams,
    pub search: Option<String>,
    pub department: Option<String>,
}

impl From<&SubjectListParams> for SubjectListQuery {
    fn from(params: &SubjectListParams) -> Self {
        Self {
            page: PageParams::from(&params.page),
            search: params.search.clone(),
            department: params.department.clone(),
        }
    }
}
