use actix_web::{HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;
use crate::models::departments::responses::DepartmentDetail;

pub async fn get_department(service: &DepartmentService, id: i64) -> ActixResult<HttpResponse> {
    let department = match service.storage.get_department_by_id(id).await {
        Ok(Some(department)) => department,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorBody::new("Department not found")));
        }
        Err(e) => return Ok(e.to_response()),
    };

    match service.storage.get_department_totals(id).await {
        Ok(totals) => Ok(HttpResponse::Ok().json(DataBody::new(DepartmentDetail {
            department,
            totals,
        }))),
        Err(e) => Ok(e.to_response()),
    }
}
