use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentListParams};
use crate::services::EnrollmentService;
use crate::utils::SafeIdI64;

// HTTP处理程序
pub async fn list_enrollments(
    service: web::Data<EnrollmentService>,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    service.list_enrollments(query.into_inner()).await
}

pub async fn create_enrollment(
    service: web::Data<EnrollmentService>,
    data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    service.create_enrollment(data.into_inner()).await
}

pub async fn delete_enrollment(
    service: web::Data<EnrollmentService>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    service.delete_enrollment(id.0).await
}

// 配置路由：写操作需要管理员身份
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/enrollments")
            .route("", web::get().to(list_enrollments))
            .route(
                "",
                web::post()
                    .to(create_enrollment)
                    .wrap(middlewares::RequireAdmin),
            )
            .route(
                "/{id}",
                web::delete()
                    .to(delete_enrollment)
                    .wrap(middlewares::RequireAdmin),
            ),
    );
}
