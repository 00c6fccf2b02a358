use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::common::pagination::{PageParams, PageQuery};
use crate::models::common::response::ErrorBody;

// 与院系/学科范围不同，班级不存在时返回 404 而非空列表
pub async fn list_class_members(
    service: &ClassService,
    id: i64,
    page: PageQuery,
) -> ActixResult<HttpResponse> {
    match service
        .storage
        .list_class_members(id, PageParams::from(&page))
        .await
    {
        Ok(Some(members)) => Ok(HttpResponse::Ok().json(members)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Class not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
