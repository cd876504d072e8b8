use colored::*;
use std::io::Write;

use super::table::{client_line, clients_table};
use super::{Console, ConsoleResult};
use crate::models::{Client, CreateClientRequest};

impl<W: Write> Console<W> {
    pub(super) async fn clients_menu(&mut self) -> ConsoleResult<()> {
        loop {
            if self.settings.show_tables {
                self.print_client_table().await?;
            }
            writeln!(self.out)?;
            writeln!(self.out, "{}", "Menú de clientes:".bright_green().bold())?;
            writeln!(self.out, "  1) Añadir cliente")?;
            writeln!(self.out, "  2) Eliminar cliente")?;
            writeln!(self.out, "  3) Buscar cliente")?;
            writeln!(self.out, "  4) Listar clientes")?;
            writeln!(self.out, "  0) Atrás")?;
            let choice = self.prompt(">>> ")?;
            self.clear()?;

            match choice.as_str() {
                "1" => self.add_client_flow().await?,
                "2" => self.delete_client_flow().await?,
                "3" => self.search_client_flow().await?,
                "4" => self.list_clients_flow().await?,
                "0" => return Ok(()),
                _ => self.warn("Opción no reconocida.")?,
            }
        }
    }

    async fn add_client_flow(&mut self) -> ConsoleResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=== Añadir cliente ===".bold())?;
        let full_name = self.read_required("Nombre completo (obligatorio, '-' no se acepta): ", false)?;
        let phone = self.read_required("Teléfono ('-' si no se conoce): ", true)?;
        let email = self.read_required("Email ('-' si no hay): ", true)?;
        let notes = self.read_required("Notas ('-' si no hay): ", true)?;

        let request = CreateClientRequest {
            full_name,
            phone: Some(phone),
            email: Some(email),
            notes: Some(notes),
        };

        match self.state.clients.create_client(request).await {
            Ok(client) => writeln!(self.out, "{}", format!("Cliente creado, id={}", client.id).green())?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn delete_client_flow(&mut self) -> ConsoleResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=== Eliminar cliente ===".bold())?;
        let Some(id) = self.read_id("ID del cliente ('-' para cancelar): ")? else {
            writeln!(self.out, "Borrado cancelado.")?;
            return Ok(());
        };

        match self.state.clients.delete_client(id).await {
            Ok(true) => writeln!(self.out, "Cliente con id={} eliminado.", id)?,
            Ok(false) => writeln!(self.out, "No existe ningún cliente con ese id.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn search_client_flow(&mut self) -> ConsoleResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=== Buscar cliente ===".bold())?;
        writeln!(self.out, "  1) Por nombre (subcadena)")?;
        writeln!(self.out, "  2) Por teléfono (subcadena)")?;
        writeln!(self.out, "  0) Atrás")?;
        let choice = self.prompt(">>> ")?;

        let result = match choice.as_str() {
            "1" => {
                let query = self.prompt("Parte del nombre: ")?;
                self.state.clients.search_by_name(&query).await
            }
            "2" => {
                let query = self.prompt("Parte del teléfono: ")?;
                self.state.clients.search_by_phone(&query).await
            }
            "0" => return Ok(()),
            _ => {
                self.warn("Opción no reconocida.")?;
                return Ok(());
            }
        };

        match result {
            Ok(clients) => {
                writeln!(self.out, "Encontrados: {}", clients.len())?;
                self.print_clients(&clients)?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn list_clients_flow(&mut self) -> ConsoleResult<()> {
        match self.state.clients.list_clients().await {
            Ok(clients) if clients.is_empty() => writeln!(self.out, "No hay clientes.")?,
            Ok(clients) => {
                writeln!(self.out, "Clientes ({}):", clients.len())?;
                self.print_clients(&clients)?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    async fn print_client_table(&mut self) -> ConsoleResult<()> {
        match self.state.clients.list_clients().await {
            Ok(clients) => writeln!(self.out, "{}", clients_table(&clients).render())?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn print_clients(&mut self, clients: &[Client]) -> ConsoleResult<()> {
        if self.settings.show_tables {
            if !clients.is_empty() {
                writeln!(self.out, "{}", clients_table(clients).render())?;
            }
        } else {
            for client in clients {
                writeln!(self.out, "  {}", client_line(client))?;
            }
        }
        Ok(())
    }
}
