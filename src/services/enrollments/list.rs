use actix_web::{HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::requests::{EnrollmentListParams, EnrollmentListQuery};

pub async fn list_enrollments(
    service: &EnrollmentService,
    params: EnrollmentListParams,
) -> ActixResult<HttpResponse> {
    match service
        .storage
        .list_enrollments(EnrollmentListQuery::from(&params))
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => Ok(e.to_response()),
    }
}
