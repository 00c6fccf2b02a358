use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::common::pagination::PageQuery;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::models::users::requests::MemberListParams;
use crate::services::SubjectService;
use crate::utils::SafeIdI64;

// HTTP处理程序
pub async fn list_subjects(
    service: web::Data<SubjectService>,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    service.list_subjects(query.into_inner()).await
}

pub async fn create_subject(
    service: web::Data<SubjectService>,
    data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    service.create_subject(data.into_inner()).await
}

pub async fn get_subject(
    service: web::Data<SubjectService>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    service.get_subject(id.0).await
}

pub async fn update_subject(
    service: web::Data<SubjectService>,
    id: SafeIdI64,
    data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    service.update_subject(id.0, data.into_inner()).await
}

pub async fn delete_subject(
    service: web::Data<SubjectService>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    service.delete_subject(id.0).await
}

pub async fn list_subject_classes(
    service: web::Data<SubjectService>,
    id: SafeIdI64,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    service.list_subject_classes(id.0, query.into_inner()).await
}

pub async fn list_subject_users(
    service: web::Data<SubjectService>,
    id: SafeIdI64,
    query: web::Query<MemberListParams>,
) -> ActixResult<HttpResponse> {
    service.list_subject_users(id.0, query.into_inner()).await
}

// 配置路由：写操作需要管理员身份
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/subjects")
            .route("", web::get().to(list_subjects))
            .route(
                "",
                web::post()
                    .to(create_subject)
                    .wrap(middlewares::RequireAdmin),
            )
            .route("/{id}", web::get().to(get_subject))
            .route(
                "/{id}",
                web::patch()
                    .to(update_subject)
                    .wrap(middlewares::RequireAdmin),
            )
            .route(
                "/{id}",
                web::delete()
                    .to(delete_subject)
                    .wrap(middlewares::RequireAdmin),
            )
            .route("/{id}/classes", web::get().to(list_subject_classes))
            .route("/{id}/users", web::get().to(list_subject_users)),
    );
}
