//! Repositorios
//!
//! Cada tabla tiene un trait de acceso, su implementación PostgreSQL
//! y una implementación en memoria (ver `memory`).

pub mod car_repository;
pub mod client_repository;
pub mod memory;
pub mod order_repository;

pub use car_repository::{CarRepository, PgCarRepository};
pub use client_repository::{ClientRepository, PgClientRepository};
pub use memory::{InMemoryCarRepository, InMemoryClientRepository, InMemoryOrderRepository};
pub use order_repository::{OrderRepository, PgOrderRepository};
