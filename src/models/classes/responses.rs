use serde::Serialize;
use ts_rs::TS;

use super::entities::Class;
use crate::models::departments::entities::Department;
use crate::models::subjects::entities::Subject;
use crate::models::users::entities::User;

// 班级及其学科、授课教师
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassWithRefs {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub subject: Option<Subject>,
    pub teacher: Option<User>,
}

// 班级详情（附带学科所属院系）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub subject: Option<Subject>,
    pub department: Option<Department>,
    pub teacher: Option<User>,
}
