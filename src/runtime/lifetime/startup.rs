use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UserListParams, UserListQuery};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个默认的 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    let count = match storage
        .list_users(UserListQuery::from(&UserListParams::default()))
        .await
    {
        Ok(page) => page.pagination.total,
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    };

    if count > 0 {
        debug!("Database already has {} user(s), skipping admin seed", count);
        return;
    }

    info!("No users found in database, creating default admin account...");

    let admin_request = CreateUserRequest {
        name: "Administrator".to_string(),
        email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string()),
        role: UserRole::Admin,
        department_id: None,
        image: None,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化和基础数据填充
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    StartupContext { storage }
}
