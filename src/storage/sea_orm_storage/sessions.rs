use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::SeaOrmStorage;
use crate::entity::{sessions, users};
use crate::errors::{ClassroomError, Result};
use crate::models::users::entities::User;

impl SeaOrmStorage {
    /// 按会话令牌查找未过期会话对应的用户
    pub async fn find_session_user_impl(&self, token: &str) -> Result<Option<User>> {
        let now = chrono::Utc::now().timestamp();

        let result = sessions::Entity::find()
            .filter(sessions::Column::Token.eq(token))
            .filter(sessions::Column::ExpiresAt.gt(now))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.and_then(|(_, user)| user.map(|u| u.into_user())))
    }
}
