use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::models::client::{Client, CreateClientRequest};
use crate::repositories::ClientRepository;
use crate::utils::errors::{validation_error, AppResult};

/// CRUD y búsqueda de clientes
#[derive(Clone)]
pub struct ClientService {
    repository: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.repository.find_all().await
    }

    pub async fn create_client(&self, request: CreateClientRequest) -> AppResult<Client> {
        request.validate()?;

        let client = request.normalize();
        if client.full_name.is_empty() {
            return Err(validation_error("full_name", "full name is required"));
        }

        let created = self.repository.insert(client).await?;
        info!("✅ Cliente creado id={} ({})", created.id, created.full_name);
        Ok(created)
    }

    /// `false` si no existía ningún cliente con ese id
    pub async fn delete_client(&self, id: i32) -> AppResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            debug!("Cliente id={} no existe, nada que borrar", id);
            return Ok(false);
        }

        let deleted = self.repository.delete_by_id(id).await?;
        if deleted {
            info!("🗑️ Cliente id={} eliminado", id);
        }
        Ok(deleted)
    }

    pub async fn get_client(&self, id: i32) -> AppResult<Option<Client>> {
        self.repository.find_by_id(id).await
    }

    pub async fn search_by_name(&self, query: &str) -> AppResult<Vec<Client>> {
        let clients = self.repository.search_by_name(query).await?;
        debug!("🔍 Búsqueda por nombre '{}': {} resultados", query, clients.len());
        Ok(clients)
    }

    pub async fn search_by_phone(&self, query: &str) -> AppResult<Vec<Client>> {
        let clients = self.repository.search_by_phone(query).await?;
        debug!("🔍 Búsqueda por teléfono '{}': {} resultados", query, clients.len());
        Ok(clients)
    }
}
