use actix_web::{HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;

pub async fn delete_enrollment(service: &EnrollmentService, id: i64) -> ActixResult<HttpResponse> {
    match service.storage.delete_enrollment(id).await {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(DataBody::new(enrollment))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Enrollment not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
