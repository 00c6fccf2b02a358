//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod departments;
mod enrollments;
mod members;
mod paginate;
mod sessions;
mod stats;
mod subjects;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{ClassroomError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 按连接参数创建存储实例并运行迁移
    pub async fn new_with_url(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassroomError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassroomError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::{Scope, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 院系模块
    async fn list_departments(
        &self,
        query: DepartmentListQuery,
    ) -> Result<PaginatedData<Department>> {
        self.list_departments_impl(query).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_totals(&self, id: i64) -> Result<DepartmentTotals> {
        self.get_department_totals_impl(id).await
    }

    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(req).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<Option<Department>> {
        self.delete_department_impl(id).await
    }

    async fn list_department_subjects(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<Subject>> {
        self.list_department_subjects_impl(id, page).await
    }

    async fn list_department_classes(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<ClassWithRefs>> {
        self.list_department_classes_impl(id, page).await
    }

    // 学科模块
    async fn list_subjects(
        &self,
        query: SubjectListQuery,
    ) -> Result<PaginatedData<SubjectWithDepartment>> {
        self.list_subjects_impl(query).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<SubjectWithDepartment>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<Option<Subject>> {
        self.delete_subject_impl(id).await
    }

    async fn list_subject_classes(
        &self,
        id: i64,
        page: PageParams,
    ) -> Result<PaginatedData<ClassWithRefs>> {
        self.list_subject_classes_impl(id, page).await
    }

    // 班级模块
    async fn list_classes(&self, query: ClassListQuery) -> Result<PaginatedData<ClassWithRefs>> {
        self.list_classes_impl(query).await
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<ClassDetail>> {
        self.get_class_by_id_impl(id).await
    }

    async fn create_class(&self, req: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(req).await
    }

    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, update).await
    }

    async fn delete_class(&self, id: i64) -> Result<Option<Class>> {
        self.delete_class_impl(id).await
    }

    async fn list_class_members(
        &self,
        class_id: i64,
        page: PageParams,
    ) -> Result<Option<PaginatedData<User>>> {
        self.list_class_members_impl(class_id, page).await
    }

    // 用户模块
    async fn list_users(&self, query: UserListQuery) -> Result<PaginatedData<UserWithDepartment>> {
        self.list_users_impl(query).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<UserWithDepartment>> {
        self.get_user_by_id_impl(id).await
    }

    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        self.create_user_impl(req).await
    }

    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: &str) -> Result<Option<User>> {
        self.delete_user_impl(id).await
    }

    async fn list_scope_members(
        &self,
        scope: Scope,
        role: MemberRole,
        page: PageParams,
    ) -> Result<PaginatedData<User>> {
        self.list_scope_members_impl(scope, role, page).await
    }

    // 选课模块
    async fn list_enrollments(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<PaginatedData<EnrollmentWithStudent>> {
        self.list_enrollments_impl(query).await
    }

    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(req).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<Option<Enrollment>> {
        self.delete_enrollment_impl(id).await
    }

    // 会话模块
    async fn find_session_user(&self, token: &str) -> Result<Option<User>> {
        self.find_session_user_impl(token).await
    }

    // 统计模块
    async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_dashboard_stats_impl().await
    }

    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| ClassroomError::service_unavailable(format!("数据库不可用: {e}")))
    }
}
