use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::DataBody;

pub async fn get_stats(service: &ClassService) -> ActixResult<HttpResponse> {
    match service.storage.get_dashboard_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(DataBody::new(stats))),
        Err(e) => Ok(e.to_response()),
    }
}
