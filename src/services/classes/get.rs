use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;

// 无法解析的 ID 与不存在的班级使用同一文案，状态码不同
pub async fn get_class(service: &ClassService, raw_id: &str) -> ActixResult<HttpResponse> {
    let Ok(id) = raw_id.trim().parse::<i64>() else {
        return Ok(HttpResponse::BadRequest().json(ErrorBody::new("No class found")));
    };

    match service.storage.get_class_by_id(id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(DataBody::new(detail))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("No class found"))),
        Err(e) => Ok(e.to_response()),
    }
}
