use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::{SeaOrmStorage, paginate::fetch_page};
use crate::entity::{classes, departments, subjects, users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedData,
    classes::{
        entities::{Class, ClassStatus},
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::{ClassDetail, ClassWithRefs},
    },
};
use crate::utils::{contains_insensitive, generate_random_code};

/// 班级邀请码长度
const INVITE_CODE_LEN: usize = 7;

impl SeaOrmStorage {
    /// 分页列出班级（附带学科与教师）
    pub async fn list_classes_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedData<ClassWithRefs>> {
        let mut select = classes::Entity::find();

        // 搜索条件：班级名称或邀请码模糊匹配
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_insensitive(classes::Column::Name, term))
                    .add(contains_insensitive(classes::Column::InviteCode, term)),
            );
        }

        // 学科筛选（ID 精确匹配）
        if let Some(subject_id) = query.subject_id {
            select = select.filter(classes::Column::SubjectId.eq(subject_id));
        }

        // 教师筛选（用户 ID 精确匹配）
        if let Some(ref teacher_id) = query.teacher_id {
            select = select.filter(classes::Column::TeacherId.eq(teacher_id.as_str()));
        }

        select = select.order_by_desc(classes::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &query.page, "班级").await?;
        let items = self.attach_class_refs(rows).await?;

        Ok(PaginatedData::new(items, pagination))
    }

    /// 批量装配班级的学科与教师引用
    ///
    /// 取页后按 ID 去重批量查询，避免逐行关联。
    pub(crate) async fn attach_class_refs(
        &self,
        rows: Vec<classes::Model>,
    ) -> Result<Vec<ClassWithRefs>> {
        let mut subject_ids: Vec<i64> = rows.iter().map(|c| c.subject_id).collect();
        subject_ids.sort_unstable();
        subject_ids.dedup();

        let mut teacher_ids: Vec<String> = rows.iter().map(|c| c.teacher_id.clone()).collect();
        teacher_ids.sort_unstable();
        teacher_ids.dedup();

        let subject_map: HashMap<i64, subjects::Model> = if subject_ids.is_empty() {
            HashMap::new()
        } else {
            subjects::Entity::find()
                .filter(subjects::Column::Id.is_in(subject_ids))
                .all(&self.db)
                .await
                .map_err(|e| ClassroomError::database_operation(format!("查询班级学科失败: {e}")))?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        };

        let teacher_map: HashMap<String, users::Model> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            users::Entity::find()
                .filter(users::Column::Id.is_in(teacher_ids))
                .all(&self.db)
                .await
                .map_err(|e| ClassroomError::database_operation(format!("查询班级教师失败: {e}")))?
                .into_iter()
                .map(|u| (u.id.clone(), u))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|c| {
                let subject = subject_map.get(&c.subject_id).cloned();
                let teacher = teacher_map.get(&c.teacher_id).cloned();
                ClassWithRefs {
                    subject: subject.map(|s| s.into_subject()),
                    teacher: teacher.map(|t| t.into_user()),
                    class: c.into_class(),
                }
            })
            .collect())
    }

    /// 通过 ID 获取班级详情（学科、学科所属院系、教师）
    pub async fn get_class_by_id_impl(&self, id: i64) -> Result<Option<ClassDetail>> {
        let Some(class) = classes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(None);
        };

        let subject = subjects::Entity::find_by_id(class.subject_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级学科失败: {e}")))?;

        let department = match &subject {
            Some(s) => departments::Entity::find_by_id(s.department_id)
                .one(&self.db)
                .await
                .map_err(|e| {
                    ClassroomError::database_operation(format!("查询班级院系失败: {e}"))
                })?,
            None => None,
        };

        let teacher = users::Entity::find_by_id(class.teacher_id.clone())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级教师失败: {e}")))?;

        Ok(Some(ClassDetail {
            subject: subject.map(|s| s.into_subject()),
            department: department.map(|d| d.into_department()),
            teacher: teacher.map(|t| t.into_user()),
            class: class.into_class(),
        }))
    }

    // 不带关联的内部查询，更新/删除路径使用
    async fn get_class_plain(&self, id: i64) -> Result<Option<Class>> {
        let result = classes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 创建班级，自动生成邀请码
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = classes::ActiveModel {
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            invite_code: Set(generate_random_code(INVITE_CODE_LEN)),
            name: Set(req.name),
            description: Set(req.description),
            capacity: Set(req.capacity.unwrap_or(50)),
            status: Set(req.status.unwrap_or(ClassStatus::Active).to_string()),
            schedules: Set(serde_json::json!([])),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(m) => Ok(m.into_class()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Subject or teacher not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "创建班级失败: {e}"
                ))),
            },
        }
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        if self.get_class_plain(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = classes::ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        // Some(None) 表示显式清空
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(schedules) = update.schedules {
            model.schedules = Set(serde_json::Value::Array(schedules));
        }

        match model.update(&self.db).await {
            Ok(_) => self.get_class_plain(id).await,
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Subject or teacher not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "更新班级失败: {e}"
                ))),
            },
        }
    }

    /// 删除班级，返回被删除的行（选课记录级联删除）
    pub async fn delete_class_impl(&self, id: i64) -> Result<Option<Class>> {
        let Some(existing) = self.get_class_plain(id).await? else {
            return Ok(None);
        };

        classes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(Some(existing))
    }
}
