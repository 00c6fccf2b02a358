use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::{PageParams, PageQuery};
use crate::models::common::patch::nullable_field;

// 院系列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
}

// 院系创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct CreateDepartmentRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

// 院系更新请求
//
// description 为三态字段：缺省不修改，显式 null 清空
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct UpdateDepartmentRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable_field")]
    #[ts(optional, type = "string | null")]
    pub description: Option<Option<String>>,
}

// 院系列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct DepartmentListQuery {
    pub page: PageParams,
    pub search: Option<String>,
}

impl From<&DepartmentListParams> for DepartmentListQuery {
    fn from(params: &DepartmentListParams) -> Self {
        Self {
            page: PageParams::from(&params.page),
            search: params.search.clone(),
        }
    }
}
