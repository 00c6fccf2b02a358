use actix_web::{HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;
use crate::models::departments::requests::UpdateDepartmentRequest;

pub async fn update_department(
    service: &DepartmentService,
    id: i64,
    data: UpdateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.update_department(id, data).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(DataBody::new(department))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Department not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
