use serde::Serialize;
use ts_rs::TS;

use super::entities::Enrollment;
use crate::models::users::entities::User;

// 选课记录及学生信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    pub student: Option<User>,
}
