pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest,
};
use crate::models::users::requests::MemberListParams;
use crate::models::common::pagination::PageQuery;
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Arc<dyn Storage>,
}

impl DepartmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取院系列表
    pub async fn list_departments(&self, params: DepartmentListParams) -> ActixResult<HttpResponse> {
        list::list_departments(self, params).await
    }

    // 获取院系详情（含统计）
    pub async fn get_department(&self, id: i64) -> ActixResult<HttpResponse> {
        get::get_department(self, id).await
    }

    // 创建院系
    pub async fn create_department(
        &self,
        data: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, data).await
    }

    // 更新院系
    pub async fn update_department(
        &self,
        id: i64,
        data: UpdateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, id, data).await
    }

    // 删除院系
    pub async fn delete_department(&self, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_department(self, id).await
    }

    // 列出院系下的学科
    pub async fn list_department_subjects(
        &self,
        id: i64,
        page: PageQuery,
    ) -> ActixResult<HttpResponse> {
        members::list_department_subjects(self, id, page).await
    }

    // 列出院系下的班级
    pub async fn list_department_classes(
        &self,
        id: i64,
        page: PageQuery,
    ) -> ActixResult<HttpResponse> {
        members::list_department_classes(self, id, page).await
    }

    // 列出院系下的用户（按角色口径）
    pub async fn list_department_users(
        &self,
        id: i64,
        params: MemberListParams,
    ) -> ActixResult<HttpResponse> {
        members::list_department_users(self, id, params).await
    }
}
