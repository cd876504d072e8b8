//! Repositorios en memoria.
//!
//! Implementan los mismos traits que los repositorios PostgreSQL y sirven
//! para tests y demos sin base de datos. Los ids se generan de forma
//! secuencial empezando en 1, como una columna SERIAL.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{Car, Client, NewClient, NewOrder, Order};
use crate::repositories::{CarRepository, ClientRepository, OrderRepository};
use crate::utils::errors::{not_found_error, AppResult};

/// Tabla ordenada por id con contador de identidad
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    table: RwLock<Table<Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_all(&self) -> AppResult<Vec<Client>> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn insert(&self, client: NewClient) -> AppResult<Client> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let created = Client {
            id,
            full_name: client.full_name,
            phone: client.phone,
            email: client.email,
            notes: client.notes,
        };
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Client>> {
        let table = self.table.read().await;
        Ok(table.filter(|c| contains_ignore_case(&c.full_name, query)))
    }

    async fn search_by_phone(&self, query: &str) -> AppResult<Vec<Client>> {
        let table = self.table.read().await;
        Ok(table.filter(|c| {
            c.phone
                .as_deref()
                .is_some_and(|phone| contains_ignore_case(phone, query))
        }))
    }
}

/// Los coches no se crean desde la aplicación; se siembran con `with_cars`.
#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    table: RwLock<Table<Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let mut table = Table::default();
        for car in cars {
            table.next_id = table.next_id.max(car.id.saturating_add(1));
            table.rows.insert(car.id, car);
        }
        Self {
            table: RwLock::new(table),
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn find_all(&self) -> AppResult<Vec<Car>> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    table: RwLock<Table<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, order: NewOrder) -> AppResult<Order> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let created = Order {
            id,
            client_id: order.client_id,
            car_id: order.car_id,
            status: order.status,
            created_at: order.created_at,
            finished_at: None,
            total_cost: order.total_cost,
            assigned_employee: order.assigned_employee,
        };
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn save(&self, order: &Order) -> AppResult<Order> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&order.id) {
            Some(row) => {
                *row = order.clone();
                Ok(order.clone())
            }
            None => Err(not_found_error("Order", order.id)),
        }
    }

    async fn update_status(&self, id: i32, status: &str) -> AppResult<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.status = status.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
