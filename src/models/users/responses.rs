use serde::Serialize;
use ts_rs::TS;

use super::entities::User;
use crate::models::departments::entities::Department;

// 用户及所属院系
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserWithDepartment {
    #[serde(flatten)]
    #[ts(flatten)]
    pub user: User,
    pub department: Option<Department>,
}
