//! Modelo de Order
//!
//! Este módulo contiene el struct Order, la petición de creación y los
//! estados conocidos. El estado se guarda como texto libre: `OrderStatus`
//! sólo describe los valores convencionales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::client::optional_field;

/// Empleado asignado por defecto
pub const DEFAULT_EMPLOYEE: &str = "Nobody";

/// Order principal - mapea a la tabla orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub client_id: i32,
    pub car_id: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub total_cost: Decimal,
    pub assigned_employee: String,
}

/// Estados convencionales de un pedido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Created,
    InProgress,
    Done,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Created,
        OrderStatus::InProgress,
        OrderStatus::Done,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Done => "DONE",
            OrderStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace([' ', '-'], "_");
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// Petición de creación de pedido; los campos `None` toman su valor por defecto
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub client_id: i32,
    pub car_id: i32,
    pub status: Option<String>,
    pub total_cost: Option<Decimal>,
    pub assigned_employee: Option<String>,
}

/// Pedido listo para insertar, con defaults y `created_at` resueltos
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub client_id: i32,
    pub car_id: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub total_cost: Decimal,
    pub assigned_employee: String,
}

impl CreateOrderRequest {
    pub fn into_new_order(self, created_at: DateTime<Utc>) -> NewOrder {
        NewOrder {
            client_id: self.client_id,
            car_id: self.car_id,
            status: optional_field(self.status)
                .unwrap_or_else(|| OrderStatus::Created.as_str().to_string()),
            created_at,
            total_cost: self.total_cost.unwrap_or(Decimal::ZERO),
            assigned_employee: optional_field(self.assigned_employee)
                .unwrap_or_else(|| DEFAULT_EMPLOYEE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("created".parse::<OrderStatus>(), Ok(OrderStatus::Created));
        assert_eq!("in progress".parse::<OrderStatus>(), Ok(OrderStatus::InProgress));
        assert_eq!(" Done ".parse::<OrderStatus>(), Ok(OrderStatus::Done));
        assert!("LOST".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_defaults_applied_when_omitted() {
        let now = Utc::now();
        let order = CreateOrderRequest {
            client_id: 1,
            car_id: 1,
            status: Some("-".to_string()),
            ..Default::default()
        }
        .into_new_order(now);

        assert_eq!(order.status, "CREATED");
        assert_eq!(order.total_cost, Decimal::ZERO);
        assert_eq!(order.assigned_employee, DEFAULT_EMPLOYEE);
        assert_eq!(order.created_at, now);
    }

    #[test]
    fn test_free_text_status_is_kept() {
        let order = CreateOrderRequest {
            client_id: 1,
            car_id: 2,
            status: Some("WAITING_PARTS".to_string()),
            total_cost: Some(Decimal::new(12050, 2)),
            assigned_employee: Some("Olga".to_string()),
        }
        .into_new_order(Utc::now());

        assert_eq!(order.status, "WAITING_PARTS");
        assert_eq!(order.total_cost.to_string(), "120.50");
        assert_eq!(order.assigned_employee, "Olga");
    }
}
