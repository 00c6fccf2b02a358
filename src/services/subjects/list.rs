use actix_web::{HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::{SubjectListParams, SubjectListQuery};

pub async fn list_subjects(
    service: &SubjectService,
    params: SubjectListParams,
) -> ActixResult<HttpResponse> {
    match service
        .storage
        .list_subjects(SubjectListQuery::from(&params))
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => Ok(e.to_response()),
    }
}
