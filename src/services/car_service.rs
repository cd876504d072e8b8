use std::sync::Arc;

use crate::models::car::Car;
use crate::repositories::CarRepository;
use crate::utils::errors::AppResult;

/// Consulta de coches (solo lectura)
#[derive(Clone)]
pub struct CarService {
    repository: Arc<dyn CarRepository>,
}

impl CarService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_cars(&self) -> AppResult<Vec<Car>> {
        self.repository.find_all().await
    }

    pub async fn get_car(&self, id: i32) -> AppResult<Option<Car>> {
        self.repository.find_by_id(id).await
    }
}
