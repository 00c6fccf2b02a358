pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::storage::Storage;

pub struct UserService {
    storage: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取用户列表
    pub async fn list_users(&self, params: UserListParams) -> ActixResult<HttpResponse> {
        list::list_users(self, params).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, id: &str) -> ActixResult<HttpResponse> {
        get::get_user(self, id).await
    }

    // 创建用户
    pub async fn create_user(&self, data: CreateUserRequest) -> ActixResult<HttpResponse> {
        create::create_user(self, data).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        id: &str,
        data: UpdateUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, id, data).await
    }

    // 删除用户
    pub async fn delete_user(&self, id: &str) -> ActixResult<HttpResponse> {
        delete::delete_user(self, id).await
    }
}
