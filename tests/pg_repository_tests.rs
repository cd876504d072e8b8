//! Tests contra PostgreSQL real.
//!
//! Sólo se ejecutan con `DATABASE_URL` definida; sin ella cada test
//! termina en seguida. Los datos llevan una etiqueta única para que
//! ejecuciones en paralelo no se mezclen.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use autoservice::config::DatabaseConfig;
use autoservice::database::DatabaseConnection;
use autoservice::models::{CreateClientRequest, CreateOrderRequest, NewClient, NewOrder};
use autoservice::repositories::{
    CarRepository, ClientRepository, OrderRepository, PgCarRepository, PgClientRepository,
    PgOrderRepository,
};
use autoservice::{AppError, AppState};

async fn test_pool() -> Option<PgPool> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("DATABASE_URL no definida, test omitido");
            return None;
        }
    };

    let connection = DatabaseConnection::new(&DatabaseConfig::new(url)).await.unwrap();
    connection.run_migrations().await.unwrap();
    Some(connection.pool().clone())
}

fn unique_tag(prefix: &str) -> String {
    format!("{}{}", prefix, Utc::now().format("%H%M%S%f"))
}

async fn insert_car(pool: &PgPool, client_id: i32, model: &str) -> i32 {
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO cars (client_id, make, model, year) VALUES ($1, 'Lada', $2, 2019) RETURNING id",
    )
    .bind(client_id)
    .bind(model)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

fn new_order(client_id: i32, car_id: i32, status: &str, total_cost: Decimal) -> NewOrder {
    NewOrder {
        client_id,
        car_id,
        status: status.to_string(),
        created_at: Utc::now(),
        total_cost,
        assigned_employee: "Nobody".to_string(),
    }
}

#[tokio::test]
async fn test_pg_client_insert_search_delete() {
    let Some(pool) = test_pool().await else { return };
    let repo = PgClientRepository::new(pool);
    let tag = unique_tag("Cli");

    let created = repo
        .insert(NewClient {
            full_name: format!("Ivan {} Petrov", tag),
            phone: Some(format!("+7 900 EXT {}", tag)),
            email: None,
            notes: None,
        })
        .await
        .unwrap();
    let second = repo
        .insert(NewClient {
            full_name: format!("Olga {}", tag),
            phone: None,
            email: Some("olga@example.com".to_string()),
            notes: Some("50%_off".to_string()),
        })
        .await
        .unwrap();

    assert!(created.id < second.id);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
    assert!(repo.exists_by_id(second.id).await.unwrap());

    let by_name = repo.search_by_name(&tag.to_lowercase()).await.unwrap();
    let ids: Vec<i32> = by_name.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![created.id, second.id]);

    let by_phone = repo
        .search_by_phone(&format!("ext {}", tag.to_lowercase()))
        .await
        .unwrap();
    assert_eq!(by_phone, vec![created.clone()]);

    // '%' y '_' se buscan de forma literal
    assert!(repo.search_by_name(&format!("%{}", tag)).await.unwrap().is_empty());

    let all = repo.find_all().await.unwrap();
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    assert!(all.contains(&second));

    assert!(repo.delete_by_id(created.id).await.unwrap());
    assert!(!repo.delete_by_id(created.id).await.unwrap());
    assert!(!repo.exists_by_id(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_pg_order_keeps_given_values() {
    let Some(pool) = test_pool().await else { return };
    let repo = PgOrderRepository::new(pool.clone());
    let long_status = "W".repeat(61);
    let cost = Decimal::new(12345, 3);

    let created = repo.insert(new_order(1, 1, &long_status, cost)).await.unwrap();
    assert_eq!(created.status, long_status);
    assert_eq!(created.total_cost, cost);
    assert_eq!(created.total_cost.to_string(), "12.345");
    assert!(created.finished_at.is_none());

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.total_cost, cost);
    assert_eq!(found.status, long_status);
}

#[tokio::test]
async fn test_pg_order_updates() {
    let Some(pool) = test_pool().await else { return };
    let repo = PgOrderRepository::new(pool);
    let created = repo
        .insert(new_order(1, 1, "CREATED", Decimal::ZERO))
        .await
        .unwrap();

    let status = format!("waiting for parts {}", "x".repeat(60));
    assert!(repo.update_status(created.id, &status).await.unwrap());
    assert!(!repo.update_status(-1, "DONE").await.unwrap());

    let mut order = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(order.status, status);

    order.assigned_employee = "E".repeat(300);
    let saved = repo.save(&order).await.unwrap();
    assert_eq!(saved.assigned_employee, order.assigned_employee);
    assert_eq!(saved.status, status);

    order.id = -1;
    assert!(matches!(repo.save(&order).await, Err(AppError::NotFound(_))));

    let all = repo.find_all().await.unwrap();
    assert!(all.iter().any(|o| o.id == created.id));
}

#[tokio::test]
async fn test_pg_cars_are_read_only_lookups() {
    let Some(pool) = test_pool().await else { return };
    let model = unique_tag("Car");
    let car_id = insert_car(&pool, 7, &model).await;
    let repo = PgCarRepository::new(pool);

    let car = repo.find_by_id(car_id).await.unwrap().unwrap();
    assert_eq!(car.model, model);
    assert_eq!(car.client_id, 7);
    assert!(repo.find_all().await.unwrap().contains(&car));
    assert!(repo.find_by_id(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_pg_services_end_to_end() {
    let Some(pool) = test_pool().await else { return };
    let state = AppState::new(pool.clone());
    let tag = unique_tag("Svc");

    let client = state
        .clients
        .create_client(CreateClientRequest {
            full_name: format!("Svc {}", tag),
            phone: Some("-".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(client.phone, None);
    let car_id = insert_car(&pool, client.id, &tag).await;

    let order = state
        .orders
        .create_order(CreateOrderRequest {
            client_id: client.id,
            car_id,
            status: Some("S".repeat(61)),
            total_cost: Some(Decimal::new(12345, 3)),
            assigned_employee: None,
        })
        .await
        .unwrap();
    assert_eq!(order.total_cost, Decimal::new(12345, 3));
    assert_eq!(order.assigned_employee, "Nobody");

    state.orders.change_status(order.id, &"D".repeat(61)).await.unwrap();
    let updated = state.orders.assign_employee(order.id, "Olga").await.unwrap();
    assert_eq!(updated.status, "D".repeat(61));
    assert_eq!(updated.assigned_employee, "Olga");

    let missing = state.orders.create_order(CreateOrderRequest {
        client_id: -1,
        car_id,
        ..Default::default()
    });
    assert!(matches!(missing.await, Err(AppError::ReferenceNotFound(_))));

    assert!(state.clients.delete_client(client.id).await.unwrap());
    let dangling = state.orders.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(dangling.client_id, client.id);
}
