use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};

use super::{SeaOrmStorage, paginate::fetch_page};
use crate::entity::{classes, departments, enrollments, subjects};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PageParams, PaginatedData,
    classes::responses::ClassWithRefs,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::DepartmentTotals,
    },
    subjects::entities::Subject,
};
use crate::utils::contains_insensitive;

impl SeaOrmStorage {
    /// 分页列出院系
    pub async fn list_departments_impl(
        &self,
        query: DepartmentListQuery,
    ) -> Result<PaginatedData<Department>> {
        let mut select = departments::Entity::find();

        // 搜索条件：名称或代码模糊匹配
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_insensitive(departments::Column::Name, term))
                    .add(contains_insensitive(departments::Column::Code, term)),
            );
        }

        select = select.order_by_desc(departments::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &query.page, "院系").await?;

        Ok(PaginatedData::new(
            rows.into_iter().map(|m| m.into_department()).collect(),
            pagination,
        ))
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = departments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 院系聚合统计：学科数、班级数（经学科关联）、去重选课学生数
    pub async fn get_department_totals_impl(&self, id: i64) -> Result<DepartmentTotals> {
        let subject_count = subjects::Entity::find()
            .filter(subjects::Column::DepartmentId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计院系学科失败: {e}")))?;

        let class_count = classes::Entity::find()
            .join(JoinType::InnerJoin, classes::Relation::Subject.def())
            .filter(subjects::Column::DepartmentId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计院系班级失败: {e}")))?;

        let student_count = enrollments::Entity::find()
            .join(JoinType::InnerJoin, enrollments::Relation::Class.def())
            .join(JoinType::InnerJoin, classes::Relation::Subject.def())
            .filter(subjects::Column::DepartmentId.eq(id))
            .select_only()
            .column(enrollments::Column::StudentId)
            .distinct()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计院系学生失败: {e}")))?;

        Ok(DepartmentTotals {
            subjects: subject_count,
            classes: class_count,
            enrolled_students: student_count,
        })
    }

    /// 创建院系
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = departments::ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(m) => Ok(m.into_department()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "Department with this code already exists",
                )),
                _ => Err(ClassroomError::database_operation(format!(
                    "创建院系失败: {e}"
                ))),
            },
        }
    }

    /// 更新院系
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        // 先检查院系是否存在
        if self.get_department_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = departments::ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        // Some(None) 表示显式清空
        if let Some(description) = update.description {
            model.description = Set(description);
        }

        match model.update(&self.db).await {
            Ok(_) => self.get_department_by_id_impl(id).await,
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "Department with this code already exists",
                )),
                _ => Err(ClassroomError::database_operation(format!(
                    "更新院系失败: {e}"
                ))),
            },
        }
    }

    /// 删除院系，返回被删除的行
    ///
    /// 仍被学科引用时由外键约束拒绝。
    pub async fn delete_department_impl(&self, id: i64) -> Result<Option<Department>> {
        let Some(existing) = self.get_department_by_id_impl(id).await? else {
            return Ok(None);
        };

        match departments::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(_) => Ok(Some(existing)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::referential_block(
                        "Cannot delete department with existing subjects or users",
                    ))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "删除院系失败: {e}"
                ))),
            },
        }
    }

    /// 分页列出院系下的学科
    pub async fn list_department_subjects_impl(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<Subject>> {
        let select = subjects::Entity::find()
            .filter(subjects::Column::DepartmentId.eq(id))
            .order_by_desc(subjects::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &page, "院系学科").await?;

        Ok(PaginatedData::new(
            rows.into_iter().map(|m| m.into_subject()).collect(),
            pagination,
        ))
    }

    /// 分页列出院系下的班级（经学科关联）
    pub async fn list_department_classes_impl(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<ClassWithRefs>> {
        let select = classes::Entity::find()
            .join(JoinType::InnerJoin, classes::Relation::Subject.def())
            .filter(subjects::Column::DepartmentId.eq(id))
            .order_by_desc(classes::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &page, "院系班级").await?;
        let items = self.attach_class_refs(rows).await?;

        Ok(PaginatedData::new(items, pagination))
    }
}
