//! Utilidades del sistema
//!
//! Manejo de errores compartido por todas las capas.

pub mod errors;

pub use errors::{AppError, AppResult};
