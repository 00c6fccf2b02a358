use actix_web::{HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::DataBody;
use crate::models::departments::requests::CreateDepartmentRequest;

pub async fn create_department(
    service: &DepartmentService,
    data: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.create_department(data).await {
        Ok(department) => Ok(HttpResponse::Created().json(DataBody::new(department))),
        Err(e) => Ok(e.to_response()),
    }
}
