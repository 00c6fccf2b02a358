use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::classes::requests::{ClassListParams, CreateClassRequest, UpdateClassRequest};
use crate::models::common::pagination::PageQuery;
use crate::services::ClassService;
use crate::utils::SafeIdI64;

// HTTP处理程序
pub async fn list_classes(
    service: web::Data<ClassService>,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    service.list_classes(query.into_inner()).await
}

pub async fn get_stats(service: web::Data<ClassService>) -> ActixResult<HttpResponse> {
    service.get_stats().await
}

pub async fn create_class(
    service: web::Data<ClassService>,
    data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    service.create_class(data.into_inner()).await
}

// ID 原样传给服务层，解析与存在性共用同一文案
pub async fn get_class(
    service: web::Data<ClassService>,
    raw_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    service.get_class(&raw_id).await
}

pub async fn update_class(
    service: web::Data<ClassService>,
    id: SafeIdI64,
    data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    service.update_class(id.0, data.into_inner()).await
}

pub async fn delete_class(
    service: web::Data<ClassService>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    service.delete_class(id.0).await
}

pub async fn list_class_members(
    service: web::Data<ClassService>,
    id: SafeIdI64,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    service.list_class_members(id.0, query.into_inner()).await
}

// 配置路由：/stats 必须先于 /{id} 注册
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/classes")
            .route("", web::get().to(list_classes))
            .route(
                "",
                web::post().to(create_class).wrap(middlewares::RequireAdmin),
            )
            .route("/stats", web::get().to(get_stats))
            .route("/{id}", web::get().to(get_class))
            .route(
                "/{id}",
                web::patch().to(update_class).wrap(middlewares::RequireAdmin),
            )
            .route(
                "/{id}",
                web::delete().to(delete_class).wrap(middlewares::RequireAdmin),
            )
            .route("/{id}/users", web::get().to(list_class_members)),
    );
}
