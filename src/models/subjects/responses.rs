use serde::Serialize;
use ts_rs::TS;

use super::entities::Subject;
use crate::models::departments::entities::Department;

// 学科及所属院系
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectWithDepartment {
    #[serde(flatten)]
    #[ts(flatten)]
    pub subject: Subject,
    pub department: Option<Department>,
}
