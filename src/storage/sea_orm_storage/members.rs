use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Select,
};

use super::{SeaOrmStorage, paginate::fetch_page};
use crate::entity::{classes, enrollments, users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedData,
    common::pagination::PageParams,
    users::entities::{MemberRole, User},
};
use crate::storage::Scope;

impl SeaOrmStorage {
    /// 列出院系或课程范围内的成员
    ///
    /// 学生通过选课记录关联，教师通过授课班级关联；未指定角色时，
    /// 院系范围按用户归属字段匹配，课程范围退化为学生口径。
    pub async fn list_scope_members_impl(
        &self,
        scope: Scope,
        role: MemberRole,
        page: PageParams,
    ) -> Result<PaginatedData<User>> {
        let select = match (scope, role) {
            (Scope::Department(id), MemberRole::Student) => {
                enrolled_students().filter(crate::entity::subjects::Column::DepartmentId.eq(id))
            }
            (Scope::Department(id), MemberRole::Teacher) => teaching_users()
                .join(JoinType::InnerJoin, classes::Relation::Subject.def())
                .filter(crate::entity::subjects::Column::DepartmentId.eq(id)),
            (Scope::Department(id), MemberRole::Unscoped) => {
                users::Entity::find().filter(users::Column::DepartmentId.eq(id))
            }
            (Scope::Subject(id), MemberRole::Teacher) => {
                teaching_users().filter(classes::Column::SubjectId.eq(id))
            }
            // 课程范围下学生是默认口径
            (Scope::Subject(id), MemberRole::Student | MemberRole::Unscoped) => {
                subject_students(id)
            }
        };

        let select = select.order_by_desc(users::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &page, "成员").await?;

        Ok(PaginatedData::new(
            rows.into_iter().map(|m| m.into_user()).collect(),
            pagination,
        ))
    }

    /// 列出班级成员；班级不存在时返回 `None`
    pub async fn list_class_members_impl(
        &self,
        class_id: i64,
        page: PageParams,
    ) -> Result<Option<PaginatedData<User>>> {
        let class = classes::Entity::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        if class.is_none() {
            return Ok(None);
        }

        let select = users::Entity::find()
            .join(JoinType::InnerJoin, users::Relation::Enrollments.def())
            .filter(enrollments::Column::ClassId.eq(class_id))
            .order_by_desc(users::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &page, "班级成员").await?;

        Ok(Some(PaginatedData::new(
            rows.into_iter().map(|m| m.into_user()).collect(),
            pagination,
        )))
    }
}

// 学生口径：用户 ⨝ 选课记录 ⨝ 班级 ⨝ 科目
fn enrolled_students() -> Select<users::Entity> {
    subject_base().join(JoinType::InnerJoin, classes::Relation::Subject.def())
}

// 学生口径（课程范围）：用户 ⨝ 选课记录 ⨝ 班级
fn subject_students(subject_id: i64) -> Select<users::Entity> {
    subject_base().filter(classes::Column::SubjectId.eq(subject_id))
}

fn subject_base() -> Select<users::Entity> {
    users::Entity::find()
        .join(JoinType::InnerJoin, users::Relation::Enrollments.def())
        .join(JoinType::InnerJoin, enrollments::Relation::Class.def())
        .distinct()
}

// 教师口径：用户 ⨝ 授课班级
fn teaching_users() -> Select<users::Entity> {
    users::Entity::find()
        .join(JoinType::InnerJoin, users::Relation::Classes.def())
        .distinct()
}
