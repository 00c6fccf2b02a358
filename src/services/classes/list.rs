use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::requests::{ClassListParams, ClassListQuery};

pub async fn list_classes(
    service: &ClassService,
    params: ClassListParams,
) -> ActixResult<HttpResponse> {
    match service
        .storage
        .list_classes(ClassListQuery::from(&params))
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => Ok(e.to_response()),
    }
}
