use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::order::{NewOrder, Order};
use crate::utils::errors::{not_found_error, AppResult};

/// Acceso a la tabla `orders`
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>>;

    async fn insert(&self, order: NewOrder) -> AppResult<Order>;

    /// Reescribe el registro completo; `NotFound` si el id ya no existe
    async fn save(&self, order: &Order) -> AppResult<Order>;

    /// UPDATE directo del estado; devuelve `true` si alguna fila cambió
    async fn update_status(&self, id: i32, status: &str) -> AppResult<bool>;
}

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ORDER_COLUMNS: &str =
    "id, client_id, car_id, status, created_at, finished_at, total_cost, assigned_employee";

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {} FROM orders ORDER BY id ASC",
            ORDER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {} FROM orders WHERE id = $1",
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn insert(&self, order: NewOrder) -> AppResult<Order> {
        let created = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (client_id, car_id, status, created_at, total_cost, assigned_employee)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(order.client_id)
        .bind(order.car_id)
        .bind(order.status)
        .bind(order.created_at)
        .bind(order.total_cost)
        .bind(order.assigned_employee)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn save(&self, order: &Order) -> AppResult<Order> {
        let saved = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET client_id = $2, car_id = $3, status = $4, created_at = $5,
                finished_at = $6, total_cost = $7, assigned_employee = $8
            WHERE id = $1
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(order.id)
        .bind(order.client_id)
        .bind(order.car_id)
        .bind(&order.status)
        .bind(order.created_at)
        .bind(order.finished_at)
        .bind(order.total_cost)
        .bind(&order.assigned_employee)
        .fetch_optional(&self.pool)
        .await?;

        saved.ok_or_else(|| not_found_error("Order", order.id))
    }

    async fn update_status(&self, id: i32, status: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
