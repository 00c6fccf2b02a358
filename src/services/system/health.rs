use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::SystemService;
use crate::models::system::responses::HealthResponse;

// 健康检查：数据库可达返回 200，否则 503
pub async fn health_check(service: &SystemService) -> ActixResult<HttpResponse> {
    match service.storage.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(HealthResponse::ok())),
        Err(e) => {
            error!("Health check failed: {}", e);
            Ok(HttpResponse::ServiceUnavailable().json(HealthResponse::down()))
        }
    }
}
