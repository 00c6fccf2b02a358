pub mod health;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SystemService {
    storage: Arc<dyn Storage>,
}

impl SystemService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 健康检查
    pub async fn health_check(&self) -> ActixResult<HttpResponse> {
        health::health_check(self).await
    }
}
