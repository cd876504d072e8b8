//! Autoservice: gestión de clientes, coches y pedidos de un taller.
//!
//! Capas: `models` (tablas), `repositories` (acceso a datos),
//! `services` (validación ligera), y dos frentes: la API REST en
//! `routes` y la consola interactiva en `console`.

pub mod config;
pub mod console;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
