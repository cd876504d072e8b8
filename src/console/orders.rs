use colored::*;
use std::io::Write;

use super::table::{car_line, cars_table, order_details, order_line, orders_table};
use super::{Console, ConsoleResult};
use crate::models::CreateOrderRequest;

impl<W: Write> Console<W> {
    pub(super) async fn orders_menu(&mut self) -> ConsoleResult<()> {
        loop {
            if self.settings.show_tables {
                self.print_order_table().await?;
            }
            writeln!(self.out)?;
            writeln!(self.out, "{}", "Menú de pedidos:".bright_green().bold())?;
            writeln!(self.out, "  1) Crear pedido")?;
            writeln!(self.out, "  2) Asignar empleado a un pedido")?;
            writeln!(self.out, "  3) Lista de pedidos")?;
            writeln!(self.out, "  4) Ver pedido por ID")?;
            writeln!(self.out, "  5) Cambiar estado del pedido")?;
            writeln!(self.out, "  0) Atrás")?;
            let choice = self.prompt(">>> ")?;
            self.clear()?;

            match choice.as_str() {
                "1" => self.create_order_flow().await?,
                "2" => self.assign_employee_flow().await?,
                "3" => self.list_orders_flow().await?,
                "4" => self.view_order_flow().await?,
                "5" => self.change_status_flow().await?,
                "0" => return Ok(()),
                _ => self.warn("Opción no reconocida.")?,
            }
        }
    }

    async fn create_order_flow(&mut self) -> ConsoleResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=== Crear pedido ===".bold())?;

        // 1. Cliente
        match self.state.clients.list_clients().await {
            Ok(clients) => {
                writeln!(self.out, "Clientes disponibles:")?;
                for client in &clients {
                    writeln!(self.out, "ID: {} | {}", client.id, client.full_name)?;
                }
            }
            Err(e) => self.report_error(&e)?,
        }

        let client_id = loop {
            let Some(id) = self.read_id("ID del cliente ('-' para cancelar): ")? else {
                writeln!(self.out, "Creación de pedido cancelada.")?;
                return Ok(());
            };
            match self.state.clients.get_client(id).await {
                Ok(Some(client)) => {
                    writeln!(self.out, "Cliente: {}", client.full_name)?;
                    break id;
                }
                Ok(None) => self.warn("No hay ningún cliente con ese ID, inténtalo de nuevo.")?,
                Err(e) => {
                    self.report_error(&e)?;
                    return Ok(());
                }
            }
        };

        // 2. Coche
        match self.state.cars.list_cars().await {
            Ok(cars) => {
                writeln!(self.out, "Coches disponibles:")?;
                if self.settings.show_tables {
                    writeln!(self.out, "{}", cars_table(&cars).render())?;
                } else {
                    for car in &cars {
                        writeln!(self.out, "{}", car_line(car))?;
                    }
                }
            }
            Err(e) => self.report_error(&e)?,
        }

        let car_id = loop {
            let Some(id) = self.read_id("ID del coche ('-' para cancelar): ")? else {
                writeln!(self.out, "Creación de pedido cancelada.")?;
                return Ok(());
            };
            match self.state.cars.get_car(id).await {
                Ok(Some(car)) => {
                    writeln!(self.out, "Coche: {}", car.display_name())?;
                    break id;
                }
                Ok(None) => self.warn("No hay ningún coche con ese ID, inténtalo de nuevo.")?,
                Err(e) => {
                    self.report_error(&e)?;
                    return Ok(());
                }
            }
        };

        // 3. Estado, importe y empleado
        let status = self.read_status("Estado (vacío o '-' = CREATED): ", true)?;
        let total_cost = self.read_decimal("Importe del pedido (vacío o '-' = 0): ")?;
        let employee = self.prompt("Empleado asignado (vacío o '-' = Nobody): ")?;

        let request = CreateOrderRequest {
            client_id,
            car_id,
            status: status.map(|s| s.as_str().to_string()),
            total_cost,
            assigned_employee: Some(employee),
        };

        match self.state.orders.create_order(request).await {
            Ok(order) => writeln!(
                self.out,
                "{}",
                format!("Pedido creado, ID del pedido: {}", order.id).green()
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn assign_employee_flow(&mut self) -> ConsoleResult<()> {
        let Some(order_id) = self.read_id("ID del pedido para asignar empleado ('-' para cancelar): ")? else {
            writeln!(self.out, "Asignación cancelada.")?;
            return Ok(());
        };
        let employee = self.read_required("Nombre del empleado: ", false)?;

        match self.state.orders.assign_employee(order_id, &employee).await {
            Ok(_) => writeln!(
                self.out,
                "Empleado {} asignado al pedido con ID {}",
                employee, order_id
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn list_orders_flow(&mut self) -> ConsoleResult<()> {
        match self.state.orders.list_orders().await {
            Ok(orders) if orders.is_empty() => writeln!(self.out, "No hay pedidos.")?,
            Ok(orders) => {
                writeln!(self.out, "Lista de pedidos:")?;
                if self.settings.show_tables {
                    writeln!(self.out, "{}", orders_table(&orders).render())?;
                } else {
                    for order in &orders {
                        writeln!(self.out, "{}", order_line(order))?;
                    }
                }
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn view_order_flow(&mut self) -> ConsoleResult<()> {
        let Some(order_id) = self.read_id("ID del pedido a consultar ('-' para cancelar): ")? else {
            writeln!(self.out, "Consulta cancelada.")?;
            return Ok(());
        };

        match self.state.orders.get_order(order_id).await {
            Ok(Some(order)) => {
                writeln!(self.out, "Detalles del pedido:")?;
                writeln!(self.out, "{}", order_details(&order))?;
            }
            Ok(None) => writeln!(self.out, "No existe ningún pedido con ese ID.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn change_status_flow(&mut self) -> ConsoleResult<()> {
        let Some(order_id) = self.read_id("ID del pedido a modificar ('-' para cancelar): ")? else {
            writeln!(self.out, "Cambio de estado cancelado.")?;
            return Ok(());
        };
        let Some(status) = self.read_status("Nuevo estado ('-' para cancelar): ", false)? else {
            writeln!(self.out, "Cambio de estado cancelado.")?;
            return Ok(());
        };

        match self.state.orders.change_status(order_id, status.as_str()).await {
            Ok(()) => writeln!(
                self.out,
                "Estado del pedido con ID {} cambiado a {}",
                order_id, status
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn print_order_table(&mut self) -> ConsoleResult<()> {
        match self.state.orders.list_orders().await {
            Ok(orders) => writeln!(self.out, "{}", orders_table(&orders).render())?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }
}
