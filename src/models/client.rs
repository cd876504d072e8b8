//! Modelo de Client
//!
//! Mapea la tabla `clients`. La representación JSON usa camelCase
//! (`fullName`), igual que la API REST.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Centinela de consola para "sin valor"
pub const SKIP_SENTINEL: &str = "-";

/// Client principal - mapea a la tabla clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// Request para crear un cliente (POST /clients y consola)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(length(max = 255))]
    pub full_name: String,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub email: Option<String>,

    pub notes: Option<String>,
}

/// Cliente ya normalizado, listo para insertar
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl CreateClientRequest {
    /// Recorta espacios y convierte `""` / `"-"` en `None` en los campos opcionales.
    pub fn normalize(self) -> NewClient {
        NewClient {
            full_name: self.full_name.trim().to_string(),
            phone: optional_field(self.phone),
            email: optional_field(self.email),
            notes: optional_field(self.notes),
        }
    }
}

pub(crate) fn optional_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != SKIP_SENTINEL)
}
