use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::car::Car;
use crate::utils::errors::AppResult;

/// Acceso de solo lectura a la tabla `cars`
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Car>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>>;
}

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn find_all(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT id, client_id, make, model, year FROM cars ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(
            "SELECT id, client_id, make, model, year FROM cars WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(car)
    }
}
