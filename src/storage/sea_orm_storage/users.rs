use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::{SeaOrmStorage, paginate::fetch_page};
use crate::entity::{departments, users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedData,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserWithDepartment,
    },
};
use crate::utils::contains_insensitive;

impl SeaOrmStorage {
    /// 分页列出用户（附带所属院系）
    pub async fn list_users_impl(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedData<UserWithDepartment>> {
        let mut select = users::Entity::find().find_also_related(departments::Entity);

        // 搜索条件：姓名或邮箱模糊匹配
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_insensitive(users::Column::Name, term))
                    .add(contains_insensitive(users::Column::Email, term)),
            );
        }

        // 角色筛选（精确匹配，未知取值匹配不到任何行）
        if let Some(ref role) = query.role {
            select = select.filter(users::Column::Role.eq(role.as_str()));
        }

        select = select.order_by_desc(users::Column::CreatedAt);

        let (rows, pagination) = fetch_page(select, &self.db, &query.page, "用户").await?;

        Ok(PaginatedData::new(
            rows.into_iter()
                .map(|(user, department)| UserWithDepartment {
                    user: user.into_user(),
                    department: department.map(|d| d.into_department()),
                })
                .collect(),
            pagination,
        ))
    }

    /// 通过 ID 获取用户（附带所属院系）
    pub async fn get_user_by_id_impl(&self, id: &str) -> Result<Option<UserWithDepartment>> {
        let result = users::Entity::find_by_id(id.to_string())
            .find_also_related(departments::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|(user, department)| UserWithDepartment {
            user: user.into_user(),
            department: department.map(|d| d.into_department()),
        }))
    }

    // 不带关联的内部查询，更新/删除路径使用
    async fn get_user_plain(&self, id: &str) -> Result<Option<User>> {
        let result = users::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 创建用户，ID 采用 UUID
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = users::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            email: Set(req.email),
            role: Set(req.role.to_string()),
            department_id: Set(req.department_id),
            image: Set(req.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&self.db).await {
            Ok(m) => Ok(m.into_user()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "User with this email already exists",
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Department not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "创建用户失败: {e}"
                ))),
            },
        }
    }

    /// 更新用户
    pub async fn update_user_impl(
        &self,
        id: &str,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        if self.get_user_plain(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = users::ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        // Some(None) 表示显式清空
        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }
        if let Some(image) = update.image {
            model.image = Set(image);
        }

        match model.update(&self.db).await {
            Ok(_) => self.get_user_plain(id).await,
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ClassroomError::conflict(
                    "User with this email already exists",
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ClassroomError::validation("Department not found"))
                }
                _ => Err(ClassroomError::database_operation(format!(
                    "更新用户失败: {e}"
                ))),
            },
        }
    }

    /// 删除用户，返回被删除的行
    ///
    /// 仍在授课的教师由外键约束拒绝；选课记录级联删除。
    pub async fn delete_user_impl(&self, id: &str) -> Result<Option<User>> {
        let Some(existing) = self.get_user_plain(id).await? else {
            return Ok(None);
        };

        match users::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
        {
            Ok(_) => Ok(Some(existing)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(
                    ClassroomError::referential_block("Cannot delete user who teaches classes"),
                ),
                _ => Err(ClassroomError::database_operation(format!(
                    "删除用户失败: {e}"
                ))),
            },
        }
    }
}
