use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;
use crate::models::common::pagination::{PageParams, PageQuery};
use crate::models::common::patch::nullable_field;

// 用户列表查询参数（来自HTTP请求）
//
// role 按精确匹配过滤，未知取值原样下推（匹配不到任何行）。
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub role: Option<String>,
}

// 用户创建请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: Option<i64>,
    pub image: Option<String>,
}

// 用户更新请求
//
// department_id 与 image 为三态字段：缺省不修改，显式 null 清空
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "nullable_field")]
    #[ts(optional, type = "number | null")]
    pub department_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable_field")]
    #[ts(optional, type = "string | null")]
    pub image: Option<Option<String>>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: PageParams,
    pub search: Option<String>,
    pub role: Option<String>,
}

impl From<&UserListParams> for UserListQuery {
    fn from(params: &UserListParams) -> Self {
        Self {
            page: PageParams::from(&params.page),
            search: params.search.clone(),
            role: params.role.clone(),
        }
    }
}

// 范围成员列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct MemberListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub page: PageQuery,
    pub role: Option<String>,
}
