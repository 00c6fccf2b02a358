use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use super::SeaOrmStorage;
use crate::entity::{classes, departments, enrollments, users};
use crate::models::classes::stats_responses::{
    CapacityStatus, ClassesByDepartment, DashboardMetrics, DashboardStats, EnrollmentTrend,
    UserDistribution,
};
use crate::models::users::entities::UserRole;
use crate::errors::{ClassroomError, Result};

impl SeaOrmStorage {
    /// 汇总仪表盘统计数据
    pub async fn get_dashboard_stats_impl(&self) -> Result<DashboardStats> {
        let total_students = users::Entity::find()
            .filter(users::Column::Role.eq(UserRole::STUDENT))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计学生数量失败: {e}")))?;

        let total_teachers = users::Entity::find()
            .filter(users::Column::Role.eq(UserRole::TEACHER))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计教师数量失败: {e}")))?;

        let total_classes = classes::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计班级数量失败: {e}")))?;

        let total_enrollments = enrollments::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计选课数量失败: {e}")))?;

        // 选课趋势：时间戳为秒级整数，按 UTC 日期在应用侧分桶；
        // 行已按时间升序，桶随之有序
        let enrollment_times: Vec<i64> = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::CreatedAt)
            .order_by_asc(enrollments::Column::CreatedAt)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计选课趋势失败: {e}")))?;

        let mut enrollment_trends: Vec<EnrollmentTrend> = Vec::new();
        for ts in enrollment_times {
            let date = chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0)
                .unwrap_or_default()
                .format("%Y-%m-%d")
                .to_string();
            match enrollment_trends.last_mut() {
                Some(last) if last.date == date => last.count += 1,
                _ => enrollment_trends.push(EnrollmentTrend { date, count: 1 }),
            }
        }

        // 各角色用户数
        let user_distribution: Vec<(String, i64)> = users::Entity::find()
            .select_only()
            .column(users::Column::Role)
            .column_as(users::Column::Id.count(), "count")
            .group_by(users::Column::Role)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计用户分布失败: {e}")))?;

        // 各院系班级数，未关联院系的班级单列
        let classes_by_dept: Vec<(Option<String>, i64)> = classes::Entity::find()
            .select_only()
            .column(departments::Column::Name)
            .column_as(classes::Column::Id.count(), "count")
            .join(JoinType::LeftJoin, classes::Relation::Subject.def())
            .join(
                JoinType::LeftJoin,
                crate::entity::subjects::Relation::Department.def(),
            )
            .group_by(departments::Column::Name)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计院系班级失败: {e}")))?;

        // 容量使用抽样：最近创建的 10 个班级
        let recent_classes = classes::Entity::find()
            .order_by_desc(classes::Column::CreatedAt)
            .limit(10)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        let mut capacity_status = Vec::with_capacity(recent_classes.len());
        for class in recent_classes {
            let enrolled = enrollments::Entity::find()
                .filter(enrollments::Column::ClassId.eq(class.id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    ClassroomError::database_operation(format!("统计选课人数失败: {e}"))
                })?;

            capacity_status.push(CapacityStatus {
                class_name: class.name,
                capacity: class.capacity,
                enrolled,
            });
        }

        Ok(DashboardStats {
            enrollment_trends,
            classes_by_dept: classes_by_dept
                .into_iter()
                .map(|(name, count)| ClassesByDepartment {
                    department_name: name.unwrap_or_else(|| "No Department".to_string()),
                    count: count as u64,
                })
                .collect(),
            user_distribution: user_distribution
                .into_iter()
                .map(|(role, count)| UserDistribution {
                    role,
                    count: count as u64,
                })
                .collect(),
            capacity_status,
            metrics: DashboardMetrics {
                total_students,
                total_teachers,
                total_classes,
                total_enrollments,
            },
        })
    }
}
