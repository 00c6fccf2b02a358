use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::{SeaOrmStorage, paginate::fetch_page};
use crate::entity::{classes, enrollments, users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedData,
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListQuery},
        responses::EnrollmentWithStudent,
    },
};

impl SeaOrmStorage {
    /// 分页列出选课记录（附带学生信息）
    pub async fn list_enrollments_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<PaginatedData<EnrollmentWithStudent>> {
        let mut select = enrollments::Entity::find().find_also_related(users::Entity);

        if let Some(class_id) = query.class_id {
            select = select.filter(enrollments::Column::ClassId.eq(class_id));
        }

        select = select.order_by_desc(enrollments::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &query.page, "选课记录").await?;

        Ok(PaginatedData::new(
            rows.into_iter()
                .map(|(enrollment, student)| EnrollmentWithStudent {
                    enrollment: enrollment.into_enrollment(),
                    student: student.map(|u| u.into_user()),
                })
                .collect(),
            pagination,
        ))
    }

    /// 创建选课记录
    ///
    /// 先校验班级存在与容量，再插入；容量检查与插入不在同一事务内。
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let class = classes::Entity::find_by_id(req.class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| ClassroomError::not_found("Class not found"))?;

        let enrolled = enrollments::Entity::find()
            .filter(enrollments::Column::ClassId.eq(req.class_id))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计选课人数失败: {e}")))?;

        // capacity 可能为负，按有符号比较（负容量等同于立即满员）
        if enrolled as i64 >= i64::from(class.capacity) {
            return Err(ClassroomError::capacity_exceeded("Class is full"));
        }

        let now = chrono::Utc::now().timestamp();

        let model = enrollments::ActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(m) => Ok(m.into_enrollment()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "Student already enrolled in this class",
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Student not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "创建选课记录失败: {e}"
                ))),
            },
        }
    }

    /// 删除选课记录，返回被删除的行
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let existing = enrollments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询选课记录失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        enrollments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(Some(existing.into_enrollment()))
    }
}
