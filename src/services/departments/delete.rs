use actix_web::{HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;

pub async fn delete_department(service: &DepartmentService, id: i64) -> ActixResult<HttpResponse> {
    match service.storage.delete_department(id).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(DataBody::new(department))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Department not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
