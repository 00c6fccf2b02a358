use actix_web::{HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;

pub async fn get_subject(service: &SubjectService, id: i64) -> ActixResult<HttpResponse> {
    match service.storage.get_subject_by_id(id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(DataBody::new(subject))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Subject not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
