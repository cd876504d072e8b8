//! Modelo de Car
//!
//! Los coches son de solo lectura para la aplicación: deben existir
//! previamente en la tabla `cars`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Car principal - mapea a la tabla cars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i32,
    pub client_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl Car {
    /// "Make Model" para mostrar en consola
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
