use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::services::SystemService;

pub async fn health_check(service: web::Data<SystemService>) -> ActixResult<HttpResponse> {
    service.health_check().await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health_check));
}
