use serde::Serialize;
use ts_rs::TS;

use super::entities::Department;

// 院系详情附带的聚合统计
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentTotals {
    pub subjects: u64,
    pub classes: u64,
    pub enrolled_students: u64,
}

// 院系详情响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentDetail {
    pub department: Department,
    pub totals: DepartmentTotals,
}
