//! Services module
//!
//! Lógica de negocio sobre los repositorios: validación ligera y
//! comprobación de referencias entre entidades.

pub mod car_service;
pub mod client_service;
pub mod order_service;

pub use car_service::CarService;
pub use client_service::ClientService;
pub use order_service::OrderService;
