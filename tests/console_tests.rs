use std::sync::Arc;

use autoservice::console::{Console, DisplaySettings, ScriptedInput};
use autoservice::models::{Car, CreateClientRequest, CreateOrderRequest};
use autoservice::repositories::{
    InMemoryCarRepository, InMemoryClientRepository, InMemoryOrderRepository,
};
use autoservice::AppState;

fn plain_settings() -> DisplaySettings {
    DisplaySettings {
        show_tables: false,
        clear_screen: false,
    }
}

fn test_state() -> AppState {
    AppState::with_repositories(
        Arc::new(InMemoryClientRepository::new()),
        Arc::new(InMemoryCarRepository::with_cars(vec![Car {
            id: 1,
            client_id: 1,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
        }])),
        Arc::new(InMemoryOrderRepository::new()),
    )
}

async fn add_client(state: &AppState, name: &str) {
    state
        .clients
        .create_client(CreateClientRequest {
            full_name: name.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
}

/// Ejecuta la consola con las líneas dadas y devuelve la salida sin colores
async fn run_console(state: AppState, settings: DisplaySettings, lines: &[&str]) -> String {
    colored::control::set_override(false);
    let input = ScriptedInput::new(lines.iter().copied());
    let mut console = Console::new(state, Box::new(input), Vec::new()).with_settings(settings);
    console.run().await.unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[tokio::test]
async fn test_exit_from_main_menu() {
    let output = run_console(test_state(), plain_settings(), &["0"]).await;
    assert!(output.contains("Menú principal:"));
    assert!(output.contains("Saliendo."));
}

#[tokio::test]
async fn test_end_of_input_exits_cleanly() {
    let output = run_console(test_state(), plain_settings(), &["1"]).await;
    assert!(output.contains("Entrada cerrada, saliendo."));
}

#[tokio::test]
async fn test_add_client_flow_with_sentinels() {
    let state = test_state();
    let output = run_console(
        state.clone(),
        plain_settings(),
        &["1", "1", "-", "", "Ivan Petrov", "-", "-", "-", "0", "0"],
    )
    .await;

    assert!(output.contains("Hace falta un valor"));
    assert!(output.contains("Cliente creado, id=1"));

    let client = state.clients.get_client(1).await.unwrap().unwrap();
    assert_eq!(client.full_name, "Ivan Petrov");
    assert_eq!(client.phone, None);
    assert_eq!(client.email, None);
}

#[tokio::test]
async fn test_delete_client_flow() {
    let state = test_state();
    add_client(&state, "Ana").await;

    let output = run_console(
        state.clone(),
        plain_settings(),
        &["1", "2", "abc", "7", "2", "1", "2", "-", "0", "0"],
    )
    .await;

    assert!(output.contains("Formato de número inválido"));
    assert!(output.contains("No existe ningún cliente con ese id."));
    assert!(output.contains("Cliente con id=1 eliminado."));
    assert!(output.contains("Borrado cancelado."));
    assert!(state.clients.list_clients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_client_by_name() {
    let state = test_state();
    add_client(&state, "Ivan Petrov").await;
    add_client(&state, "Olga Smirnova").await;

    let output = run_console(state, plain_settings(), &["1", "3", "1", "IVAN", "0", "0"]).await;

    assert!(output.contains("Encontrados: 1"));
    assert!(output.contains("id=1 | Ivan Petrov | - | -"));
    assert!(!output.contains("Olga Smirnova"));
}

#[tokio::test]
async fn test_create_order_flow_with_defaults() {
    let state = test_state();
    add_client(&state, "Ivan Petrov").await;

    let output = run_console(
        state.clone(),
        plain_settings(),
        &["2", "1", "5", "1", "9", "1", "", "-", "", "0", "0"],
    )
    .await;

    assert!(output.contains("No hay ningún cliente con ese ID"));
    assert!(output.contains("Cliente: Ivan Petrov"));
    assert!(output.contains("No hay ningún coche con ese ID"));
    assert!(output.contains("Coche: Toyota Corolla"));
    assert!(output.contains("Pedido creado, ID del pedido: 1"));

    let order = state.orders.get_order(1).await.unwrap().unwrap();
    assert_eq!(order.status, "CREATED");
    assert_eq!(order.total_cost.to_string(), "0");
    assert_eq!(order.assigned_employee, "Nobody");
}

#[tokio::test]
async fn test_create_order_flow_with_values() {
    let state = test_state();
    add_client(&state, "Ivan Petrov").await;

    let output = run_console(
        state.clone(),
        plain_settings(),
        &["2", "1", "1", "1", "in_progress", "12,5", "1500.50", "Sergey", "0", "0"],
    )
    .await;

    assert!(output.contains("Formato de número inválido"));
    let order = state.orders.get_order(1).await.unwrap().unwrap();
    assert_eq!(order.status, "IN_PROGRESS");
    assert_eq!(order.total_cost.to_string(), "1500.50");
    assert_eq!(order.assigned_employee, "Sergey");
}

#[tokio::test]
async fn test_create_order_can_be_cancelled() {
    let state = test_state();
    add_client(&state, "Ivan Petrov").await;

    let output = run_console(state.clone(), plain_settings(), &["2", "1", "1", "-", "0", "0"]).await;

    assert!(output.contains("Creación de pedido cancelada."));
    assert!(state.orders.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_mutations_from_console() {
    let state = test_state();
    add_client(&state, "Ivan Petrov").await;
    state
        .orders
        .create_order(CreateOrderRequest {
            client_id: 1,
            car_id: 1,
            ..Default::default()
        })
        .await
        .unwrap();

    let output = run_console(
        state.clone(),
        plain_settings(),
        &[
            "2", // menú de pedidos
            "2", "1", "Olga", // asignar empleado
            "5", "1", "7", "3", // cambiar estado: 7 no existe, 3 = DONE
            "5", "42", "2", // pedido inexistente
            "4", "1", // ver pedido
            "3", // listar
            "0", "0",
        ],
    )
    .await;

    assert!(output.contains("Empleado Olga asignado al pedido con ID 1"));
    assert!(output.contains("Estado desconocido"));
    assert!(output.contains("Estado del pedido con ID 1 cambiado a DONE"));
    assert!(output.contains("Order with id '42' not found"));
    assert!(output.contains("Detalles del pedido:"));
    assert!(output.contains("ID: 1 | Estado: DONE | Cliente ID: 1 | Coche ID: 1 | Empleado: Olga"));

    let order = state.orders.get_order(1).await.unwrap().unwrap();
    assert_eq!(order.status, "DONE");
    assert_eq!(order.assigned_employee, "Olga");
}

#[tokio::test]
async fn test_visible_tables_toggle() {
    let state = test_state();
    add_client(&state, "Ivan Petrov").await;

    let output = run_console(state, plain_settings(), &["3", "1", "0", "1", "0", "0"]).await;

    assert!(output.contains("Tablas visibles: activado"));
    assert!(output.contains("| ID | Nombre      | Teléfono | Email | Notas |"));
}
