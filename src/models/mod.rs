//! Modelos del sistema
//!
//! Este módulo contiene los modelos que mapean las tablas
//! `clients`, `cars` y `orders`.

pub mod car;
pub mod client;
pub mod order;

pub use car::Car;
pub use client::{Client, CreateClientRequest, NewClient};
pub use order::{CreateOrderRequest, NewOrder, Order, OrderStatus};
