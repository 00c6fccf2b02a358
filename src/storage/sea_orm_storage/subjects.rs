use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::{SeaOrmStorage, paginate::fetch_page};
use crate::entity::{classes, departments, subjects};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PageParams, PaginatedData,
    classes::responses::ClassWithRefs,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectWithDepartment,
    },
};
use crate::utils::contains_insensitive;

impl SeaOrmStorage {
    /// 分页列出学科（附带所属院系）
    pub async fn list_subjects_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<PaginatedData<SubjectWithDepartment>> {
        let mut select = subjects::Entity::find().find_also_related(departments::Entity);

        // 搜索条件：学科名称或代码模糊匹配
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_insensitive(subjects::Column::Name, term))
                    .add(contains_insensitive(subjects::Column::Code, term)),
            );
        }

        // 跨表过滤：按院系名称模糊匹配
        if let Some(ref department) = query.department
            && !department.trim().is_empty()
        {
            select = select.filter(contains_insensitive(
                departments::Column::Name,
                department.trim(),
            ));
        }

        select = select.order_by_desc(subjects::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &query.page, "学科").await?;

        Ok(PaginatedData::new(
            rows.into_iter()
                .map(|(subject, department)| SubjectWithDepartment {
                    subject: subject.into_subject(),
                    department: department.map(|d| d.into_department()),
                })
                .collect(),
            pagination,
        ))
    }

    /// 通过 ID 获取学科（附带所属院系）
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<SubjectWithDepartment>> {
        let result = subjects::Entity::find_by_id(id)
            .find_also_related(departments::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学科失败: {e}")))?;

        Ok(result.map(|(subject, department)| SubjectWithDepartment {
            subject: subject.into_subject(),
            department: department.map(|d| d.into_department()),
        }))
    }

    // 不带关联的内部查询，更新/删除路径使用
    async fn get_subject_plain(&self, id: i64) -> Result<Option<Subject>> {
        let result = subjects::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学科失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 创建学科
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = subjects::ActiveModel {
            department_id: Set(req.department_id),
            name: Set(req.name),
            code: Set(req.code),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(m) => Ok(m.into_subject()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "Subject with this code already exists",
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Department not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "创建学科失败: {e}"
                ))),
            },
        }
    }

    /// 更新学科
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_plain(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = subjects::ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        // Some(None) 表示显式清空
        if let Some(description) = update.description {
            model.description = Set(description);
        }

        match model.update(&self.db).await {
            Ok(_) => self.get_subject_plain(id).await,
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "Subject with this code already exists",
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Department not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "更新学科失败: {e}"
                ))),
            },
        }
    }

    /// 删除学科，返回被删除的行（关联班级级联删除）
    pub async fn delete_subject_impl(&self, id: i64) -> Result<Option<Subject>> {
        let Some(existing) = self.get_subject_plain(id).await? else {
            return Ok(None);
        };

        subjects::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除学科失败: {e}")))?;

        Ok(Some(existing))
    }

    /// 分页列出学科下的班级
    pub async fn list_subject_classes_impl(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<ClassWithRefs>> {
        let select = classes::Entity::find()
            .filter(classes::Column::SubjectId.eq(id))
            .order_by_desc(classes::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &page, "学科班级").await?;
        let items = self.attach_class_refs(rows).await?;

        Ok(PaginatedData::new(items, pagination))
    }
}
