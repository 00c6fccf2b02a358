use actix_web::{HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::departments::requests::{DepartmentListParams, DepartmentListQuery};

pub async fn list_departments(
    service: &DepartmentService,
    params: DepartmentListParams,
) -> ActixResult<HttpResponse> {
    match service
        .storage
        .list_departments(DepartmentListQuery::from(&params))
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => Ok(e.to_response()),
    }
}
