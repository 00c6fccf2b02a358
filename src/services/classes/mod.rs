pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod stats;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{ClassListParams, CreateClassRequest, UpdateClassRequest};
use crate::models::common::pagination::PageQuery;
use crate::storage::Storage;

pub struct ClassService {
    storage: Arc<dyn Storage>,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取班级列表
    pub async fn list_classes(&self, params: ClassListParams) -> ActixResult<HttpResponse> {
        list::list_classes(self, params).await
    }

    // 获取仪表盘统计
    pub async fn get_stats(&self) -> ActixResult<HttpResponse> {
        stats::get_stats(self).await
    }

    // 获取班级详情（ID 原样传入，无法解析时与不存在同文案报错）
    pub async fn get_class(&self, raw_id: &str) -> ActixResult<HttpResponse> {
        get::get_class(self, raw_id).await
    }

    // 创建班级
    pub async fn create_class(&self, data: CreateClassRequest) -> ActixResult<HttpResponse> {
        create::create_class(self, data).await
    }

    // 更新班级
    pub async fn update_class(
        &self,
        id: i64,
        data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, id, data).await
    }

    // 删除班级
    pub async fn delete_class(&self, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_class(self, id).await
    }

    // 列出班级成员
    pub async fn list_class_members(&self, id: i64, page: PageQuery) -> ActixResult<HttpResponse> {
        members::list_class_members(self, id, page).await
    }
}
