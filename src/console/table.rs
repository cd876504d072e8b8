//! Formato de salida de la consola: tablas alineadas y líneas compactas.

use crate::models::{Car, Client, Order};

const MISSING: &str = "-";

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// Tabla de texto con bordes, columnas ajustadas al contenido
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let separator = {
            let parts: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
            format!("+{}+", parts.join("+"))
        };
        let format_row = |cells: &[String]| {
            let parts: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    let padding = w - cell.chars().count();
                    format!(" {}{} ", cell, " ".repeat(padding))
                })
                .collect();
            format!("|{}|", parts.join("|"))
        };

        let mut lines = vec![separator.clone(), format_row(&self.headers), separator.clone()];
        for row in &self.rows {
            lines.push(format_row(row));
        }
        if !self.rows.is_empty() {
            lines.push(separator);
        }
        lines.join("\n")
    }
}

pub fn clients_table(clients: &[Client]) -> Table {
    let mut table = Table::new(&["ID", "Nombre", "Teléfono", "Email", "Notas"]);
    for c in clients {
        table.add_row(vec![
            c.id.to_string(),
            c.full_name.clone(),
            or_dash(c.phone.as_deref()).to_string(),
            or_dash(c.email.as_deref()).to_string(),
            or_dash(c.notes.as_deref()).to_string(),
        ]);
    }
    table
}

pub fn cars_table(cars: &[Car]) -> Table {
    let mut table = Table::new(&["ID", "Cliente", "Marca", "Modelo", "Año"]);
    for car in cars {
        table.add_row(vec![
            car.id.to_string(),
            car.client_id.to_string(),
            car.make.clone(),
            car.model.clone(),
            car.year.to_string(),
        ]);
    }
    table
}

pub fn orders_table(orders: &[Order]) -> Table {
    let mut table = Table::new(&[
        "ID", "Estado", "Cliente", "Coche", "Empleado", "Importe", "Creado",
    ]);
    for o in orders {
        table.add_row(vec![
            o.id.to_string(),
            o.status.clone(),
            o.client_id.to_string(),
            o.car_id.to_string(),
            o.assigned_employee.clone(),
            o.total_cost.to_string(),
            o.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}

pub fn client_line(client: &Client) -> String {
    format!(
        "id={} | {} | {} | {}",
        client.id,
        client.full_name,
        or_dash(client.phone.as_deref()),
        or_dash(client.email.as_deref())
    )
}

pub fn car_line(car: &Car) -> String {
    format!("ID: {} | {} ({})", car.id, car.display_name(), car.year)
}

pub fn order_line(order: &Order) -> String {
    format!(
        "ID: {} | Estado: {} | Cliente ID: {} | Coche ID: {} | Empleado: {}",
        order.id, order.status, order.client_id, order.car_id, order.assigned_employee
    )
}

pub fn order_details(order: &Order) -> String {
    let finished = order
        .finished_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string());
    format!(
        "{} | Importe: {} | Creado: {} | Terminado: {}",
        order_line(order),
        order.total_cost,
        order.created_at.format("%Y-%m-%d %H:%M"),
        finished
    )
}
