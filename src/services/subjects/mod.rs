pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::pagination::PageQuery;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::models::users::requests::MemberListParams;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Arc<dyn Storage>,
}

impl SubjectService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取学科列表
    pub async fn list_subjects(&self, params: SubjectListParams) -> ActixResult<HttpResponse> {
        list::list_subjects(self, params).await
    }

    // 获取学科详情
    pub async fn get_subject(&self, id: i64) -> ActixResult<HttpResponse> {
        get::get_subject(self, id).await
    }

    // 创建学科
    pub async fn create_subject(&self, data: CreateSubjectRequest) -> ActixResult<HttpResponse> {
        create::create_subject(self, data).await
    }

    // 更新学科
    pub async fn update_subject(
        &self,
        id: i64,
        data: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, id, data).await
    }

    // 删除学科
    pub async fn delete_subject(&self, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, id).await
    }

    // 列出学科下的班级
    pub async fn list_subject_classes(
        &self,
        id: i64,
        page: PageQuery,
    ) -> ActixResult<HttpResponse> {
        members::list_subject_classes(self, id, page).await
    }

    // 列出学科下的用户（按角色口径）
    pub async fn list_subject_users(
        &self,
        id: i64,
        params: MemberListParams,
    ) -> ActixResult<HttpResponse> {
        members::list_subject_users(self, id, params).await
    }
}
