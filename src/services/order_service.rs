//! Servicio de pedidos
//!
//! Valida que el cliente y el coche existan al crear un pedido. Después
//! de la creación no se vuelven a comprobar: un cliente borrado deja
//! el pedido con una referencia colgante.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::{CarService, ClientService};
use crate::models::order::{CreateOrderRequest, Order};
use crate::repositories::OrderRepository;
use crate::utils::errors::{not_found_error, reference_error, AppResult};

#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
    client_service: ClientService,
    car_service: CarService,
}

impl OrderService {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        client_service: ClientService,
        car_service: CarService,
    ) -> Self {
        Self {
            repository,
            client_service,
            car_service,
        }
    }

    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.repository.find_all().await
    }

    pub async fn get_order(&self, id: i32) -> AppResult<Option<Order>> {
        self.repository.find_by_id(id).await
    }

    /// Crea un pedido; `ReferenceNotFound` si el cliente o el coche no existen.
    pub async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order> {
        if self.client_service.get_client(request.client_id).await?.is_none() {
            return Err(reference_error("Client", request.client_id));
        }

        if self.car_service.get_car(request.car_id).await?.is_none() {
            return Err(reference_error("Car", request.car_id));
        }

        let order = self.repository.insert(request.into_new_order(Utc::now())).await?;
        info!(
            "📋 Pedido creado id={} cliente={} coche={} estado={}",
            order.id, order.client_id, order.car_id, order.status
        );
        Ok(order)
    }

    /// Sobrescribe el estado sin consultar antes el pedido.
    pub async fn change_status(&self, order_id: i32, new_status: &str) -> AppResult<()> {
        if !self.repository.update_status(order_id, new_status).await? {
            return Err(not_found_error("Order", order_id));
        }

        info!("🔄 Pedido id={} cambia a estado {}", order_id, new_status);
        Ok(())
    }

    pub async fn assign_employee(&self, order_id: i32, employee_name: &str) -> AppResult<Order> {
        let mut order = self
            .repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| not_found_error("Order", order_id))?;

        order.assigned_employee = employee_name.to_string();
        let saved = self.repository.save(&order).await?;

        info!("👷 Empleado '{}' asignado al pedido id={}", employee_name, order_id);
        Ok(saved)
    }
}
