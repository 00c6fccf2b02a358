use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::models::DataBody;
use crate::models::enrollments::requests::CreateEnrollmentRequest;

pub async fn create_enrollment(
    service: &EnrollmentService,
    data: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.create_enrollment(data).await {
        Ok(enrollment) => {
            info!(
                "Enrollment created: student {} in class {}",
                enrollment.student_id, enrollment.class_id
            );
            Ok(HttpResponse::Created().json(DataBody::new(enrollment)))
        }
        Err(e) => Ok(e.to_response()),
    }
}
