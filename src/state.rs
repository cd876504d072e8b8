//! Shared application state
//!
//! Este módulo define el estado compartido que reciben el router de Axum
//! y la consola: los tres servicios ya cableados a sus repositorios.

use sqlx::PgPool;
use std::sync::Arc;

use crate::repositories::{
    CarRepository, ClientRepository, InMemoryCarRepository, InMemoryClientRepository,
    InMemoryOrderRepository, OrderRepository, PgCarRepository, PgClientRepository,
    PgOrderRepository,
};
use crate::services::{CarService, ClientService, OrderService};

#[derive(Clone)]
pub struct AppState {
    pub clients: ClientService,
    pub cars: CarService,
    pub orders: OrderService,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgClientRepository::new(pool.clone())),
            Arc::new(PgCarRepository::new(pool.clone())),
            Arc::new(PgOrderRepository::new(pool)),
        )
    }

    pub fn with_repositories(
        clients: Arc<dyn ClientRepository>,
        cars: Arc<dyn CarRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        let client_service = ClientService::new(clients);
        let car_service = CarService::new(cars);
        let order_service = OrderService::new(orders, client_service.clone(), car_service.clone());

        Self {
            clients: client_service,
            cars: car_service,
            orders: order_service,
        }
    }

    /// Estado en memoria con los coches indicados
    pub fn in_memory(cars: InMemoryCarRepository) -> Self {
        Self::with_repositories(
            Arc::new(InMemoryClientRepository::new()),
            Arc::new(cars),
            Arc::new(InMemoryOrderRepository::new()),
        )
    }
}
