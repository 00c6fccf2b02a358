//! 学科范围的关联列表：班级、成员
//!
//! 范围 ID 不存在时返回空的分页结果而非 404。

use actix_web::{HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::common::pagination::{PageParams, PageQuery};
use crate::models::users::entities::MemberRole;
use crate::models::users::requests::MemberListParams;
use crate::storage::Scope;

pub async fn list_subject_classes(
    service: &SubjectService,
    id: i64,
    page: PageQuery,
) -> ActixResult<HttpResponse> {
    match service
        .storage
        .list_subject_classes(id, PageParams::from(&page))
        .await
    {
        Ok(classes) => Ok(HttpResponse::Ok().json(classes)),
        Err(e) => Ok(e.to_response()),
    }
}

pub async fn list_subject_users(
    service: &SubjectService,
    id: i64,
    params: MemberListParams,
) -> ActixResult<HttpResponse> {
    let role = MemberRole::from_param(params.role.as_deref());

    match service
        .storage
        .list_scope_members(Scope::Subject(id), role, PageParams::from(&params.page))
        .await
    {
        Ok(members) => Ok(HttpResponse::Ok().json(members)),
        Err(e) => Ok(e.to_response()),
    }
}
