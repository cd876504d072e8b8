use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::client::{Client, NewClient};
use crate::utils::errors::AppResult;

/// Acceso a la tabla `clients`
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Todos los clientes ordenados por id ascendente
    async fn find_all(&self) -> AppResult<Vec<Client>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;

    async fn insert(&self, client: NewClient) -> AppResult<Client>;

    /// Devuelve `true` si se borró alguna fila
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    /// Subcadena sin distinguir mayúsculas sobre `full_name`, ordenado por id
    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Client>>;

    /// Subcadena sin distinguir mayúsculas sobre `phone`, ordenado por id
    async fn search_by_phone(&self, query: &str) -> AppResult<Vec<Client>>;
}

pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_all(&self) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, full_name, phone, email, notes FROM clients ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, full_name, phone, email, notes FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn insert(&self, client: NewClient) -> AppResult<Client> {
        let created = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (full_name, phone, email, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, phone, email, notes
            "#,
        )
        .bind(client.full_name)
        .bind(client.phone)
        .bind(client.email)
        .bind(client.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Client>> {
        // POSITION en lugar de ILIKE: '%' y '_' del usuario son literales
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, full_name, phone, email, notes FROM clients
            WHERE POSITION(LOWER($1) IN LOWER(full_name)) > 0
            ORDER BY id ASC
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    async fn search_by_phone(&self, query: &str) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, full_name, phone, email, notes FROM clients
            WHERE phone IS NOT NULL AND POSITION(LOWER($1) IN LOWER(phone)) > 0
            ORDER BY id ASC
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }
}
