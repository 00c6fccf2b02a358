use std::sync::Arc;

use crate::models::{
    PageParams, PaginatedData,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::{ClassDetail, ClassWithRefs},
        stats_responses::DashboardStats,
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::DepartmentTotals,
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListQuery},
        responses::EnrollmentWithStudent,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectWithDepartment,
    },
    users::{
        entities::{MemberRole, User},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserWithDepartment,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 成员查询的限定范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Department(i64),
    Subject(i64),
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 院系管理方法
    // 列出院系
    async fn list_departments(
        &self,
        query: DepartmentListQuery,
    ) -> Result<PaginatedData<Department>>;
    // 通过ID获取院系
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 获取院系聚合统计（学科数、班级数、去重选课学生数）
    async fn get_department_totals(&self, id: i64) -> Result<DepartmentTotals>;
    // 创建院系
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department>;
    // 更新院系
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    // 删除院系，返回被删除的行
    async fn delete_department(&self, id: i64) -> Result<Option<Department>>;
    // 列出院系下的学科
    async fn list_department_subjects(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<Subject>>;
    // 列出院系下的班级（经学科关联）
    async fn list_department_classes(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<ClassWithRefs>>;

    /// 学科管理方法
    // 列出学科
    async fn list_subjects(
        &self,
        query: SubjectListQuery,
    ) -> Result<PaginatedData<SubjectWithDepartment>>;
    // 通过ID获取学科
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<SubjectWithDepartment>>;
    // 创建学科
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    // 更新学科
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除学科，返回被删除的行
    async fn delete_subject(&self, id: i64) -> Result<Option<Subject>>;
    // 列出学科下的班级
    async fn list_subject_classes(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<ClassWithRefs>>;

    /// 班级管理方法
    // 列出班级
    async fn list_classes(&self, query: ClassListQuery) -> Result<PaginatedData<ClassWithRefs>>;
    // 通过ID获取班级详情（含学科、院系、教师）
    async fn get_class_by_id(&self, id: i64) -> Result<Option<ClassDetail>>;
    // 创建班级（生成邀请码）
    async fn create_class(&self, req: CreateClassRequest) -> Result<Class>;
    // 更新班级
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    // 删除班级，返回被删除的行
    async fn delete_class(&self, id: i64) -> Result<Option<Class>>;
    // 列出班级成员（选课学生）；班级不存在时返回 None
    async fn list_class_members(
        &self,
        class_id: i64,
        page: PageParams,
    ) -> Result<Option<PaginatedData<User>>>;

    /// 用户管理方法
    // 列出用户
    async fn list_users(&self, query: UserListQuery) -> Result<PaginatedData<UserWithDepartment>>;
    // 通过ID获取用户
    async fn get_user_by_id(&self, id: &str) -> Result<Option<UserWithDepartment>>;
    // 创建用户
    async fn create_user(&self, req: CreateUserRequest) -> Result<User>;
    // 更新用户
    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户，返回被删除的行
    async fn delete_user(&self, id: &str) -> Result<Option<User>>;
    // 按角色在限定范围内聚合用户
    async fn list_scope_members(
        &self,
        scope: Scope,
        role: MemberRole,
        page: PageParams,
    ) -> Result<PaginatedData<User>>;

    /// 选课管理方法
    // 列出选课记录
    async fn list_enrollments(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<PaginatedData<EnrollmentWithStudent>>;
    // 创建选课记录（容量检查）
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 删除选课记录，返回被删除的行
    async fn delete_enrollment(&self, id: i64) -> Result<Option<Enrollment>>;

    /// 会话方法
    // 校验令牌并返回对应用户（不存在或过期时为 None）
    async fn find_session_user(&self, token: &str) -> Result<Option<User>>;

    /// 统计方法
    // 仪表盘统计
    async fn get_dashboard_stats(&self) -> Result<DashboardStats>;

    /// 健康检查
    async fn ping(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
