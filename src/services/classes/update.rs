use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::DataBody;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::common::response::ErrorBody;

pub async fn update_class(
    service: &ClassService,
    id: i64,
    data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.update_class(id, data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(DataBody::new(class))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Class not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
