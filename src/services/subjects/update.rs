use actix_web::{HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;
use crate::models::subjects::requests::UpdateSubjectRequest;

pub async fn update_subject(
    service: &SubjectService,
    id: i64,
    data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.update_subject(id, data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(DataBody::new(subject))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Subject not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
