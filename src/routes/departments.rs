use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::common::pagination::PageQuery;
use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest,
};
use crate::models::users::requests::MemberListParams;
use crate::services::DepartmentService;
use crate::utils::SafeIdI64;

// HTTP处理程序
pub async fn list_departments(
    service: web::Data<DepartmentService>,
    query: web::Query<DepartmentListParams>,
) -> ActixResult<HttpResponse> {
    service.list_departments(query.into_inner()).await
}

pub async fn create_department(
    service: web::Data<DepartmentService>,
    data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    service.create_department(data.into_inner()).await
}

pub async fn get_department(
    service: web::Data<DepartmentService>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    service.get_department(id.0).await
}

pub async fn update_department(
    service: web::Data<DepartmentService>,
    id: SafeIdI64,
    data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    service.update_department(id.0, data.into_inner()).await
}

pub async fn delete_department(
    service: web::Data<DepartmentService>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    service.delete_department(id.0).await
}

pub async fn list_department_subjects(
    service: web::Data<DepartmentService>,
    id: SafeIdI64,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    service
        .list_department_subjects(id.0, query.into_inner())
        .await
}

pub async fn list_department_classes(
    service: web::Data<DepartmentService>,
    id: SafeIdI64,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    service
        .list_department_classes(id.0, query.into_inner())
        .await
}

pub async fn list_department_users(
    service: web::Data<DepartmentService>,
    id: SafeIdI64,
    query: web::Query<MemberListParams>,
) -> ActixResult<HttpResponse> {
    service
        .list_department_users(id.0, query.into_inner())
        .await
}

// 配置路由：写操作需要管理员身份
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/departments")
            .route("", web::get().to(list_departments))
            .route(
                "",
                web::post()
                    .to(create_department)
                    .wrap(middlewares::RequireAdmin),
            )
            .route("/{id}", web::get().to(get_department))
            .route(
                "/{id}",
                web::patch()
                    .to(update_department)
                    .wrap(middlewares::RequireAdmin),
            )
            .route(
                "/{id}",
                web::delete()
                    .to(delete_department)
                    .wrap(middlewares::RequireAdmin),
            )
            .route("/{id}/subjects", web::get().to(list_department_subjects))
            .route("/{id}/classes", web::get().to(list_department_classes))
            .route("/{id}/users", web::get().to(list_department_users)),
    );
}
