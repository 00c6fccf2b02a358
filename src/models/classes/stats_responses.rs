use serde::Serialize;
use ts_rs::TS;

// 核心指标
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct DashboardMetrics {
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_classes: u64,
    pub total_enrollments: u64,
}

// 按日期统计的选课数量
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct EnrollmentTrend {
    pub date: String,
    pub count: u64,
}

// 按院系统计的班级数量
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct ClassesByDepartment {
    pub department_name: String,
    pub count: u64,
}

// 按角色统计的用户数量
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct UserDistribution {
    pub role: String,
    pub count: u64,
}

// 班级容量使用情况（抽样）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CapacityStatus {
    pub class_name: String,
    pub capacity: i32,
    pub enrolled: u64,
}

// 仪表盘统计响应
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct DashboardStats {
    pub enrollment_trends: Vec<EnrollmentTrend>,
    pub classes_by_dept: Vec<ClassesByDepartment>,
    pub user_distribution: Vec<UserDistribution>,
    pub capacity_status: Vec<CapacityStatus>,
    pub metrics: DashboardMetrics,
}
