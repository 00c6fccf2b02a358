use actix_web::{HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::DataBody;
use crate::models::subjects::requests::CreateSubjectRequest;

pub async fn create_subject(
    service: &SubjectService,
    data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.create_subject(data).await {
        Ok(subject) => Ok(HttpResponse::Created().json(DataBody::new(subject))),
        Err(e) => Ok(e.to_response()),
    }
}
