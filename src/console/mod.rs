//! Consola interactiva
//!
//! Menús numerados sobre los servicios de clientes, coches y pedidos.
//! `"-"` es el centinela universal para cancelar, omitir o tomar el
//! valor por defecto. La consola no guarda más estado que los ajustes
//! de visualización.

mod clients;
pub mod input;
mod orders;
pub mod table;

use colored::*;
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub use input::{InputSource, ScriptedInput, StdinInput};

use crate::models::client::SKIP_SENTINEL;
use crate::models::OrderStatus;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    /// La entrada se cerró (EOF); termina el bucle sin error
    #[error("input closed")]
    InputClosed,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Ajustes de presentación, sólo en memoria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Mostrar la tabla de registros al entrar en cada menú y listar en tablas
    pub show_tables: bool,
    pub clear_screen: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_tables: false,
            clear_screen: true,
        }
    }
}

pub struct Console<W: Write> {
    state: AppState,
    input: Box<dyn InputSource>,
    out: W,
    settings: DisplaySettings,
}

impl<W: Write> Console<W> {
    pub fn new(state: AppState, input: Box<dyn InputSource>, out: W) -> Self {
        Self {
            state,
            input,
            out,
            settings: DisplaySettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DisplaySettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Bucle principal; termina con "0" o al cerrarse la entrada.
    pub async fn run(&mut self) -> ConsoleResult<()> {
        match self.main_loop().await {
            Err(ConsoleError::InputClosed) => {
                writeln!(self.out)?;
                writeln!(self.out, "Entrada cerrada, saliendo.")?;
                Ok(())
            }
            other => other,
        }
    }

    async fn main_loop(&mut self) -> ConsoleResult<()> {
        self.clear()?;
        writeln!(self.out, "{}", "=== Autoservice ===".bright_blue().bold())?;
        writeln!(self.out, "Programa iniciado.")?;
        writeln!(self.out)?;

        loop {
            writeln!(self.out, "{}", "Menú principal:".bright_green().bold())?;
            writeln!(self.out, "  1) Clientes")?;
            writeln!(self.out, "  2) Pedidos")?;
            writeln!(self.out, "  3) Ajustes de visualización")?;
            writeln!(self.out, "  0) Salir")?;
            let choice = self.prompt(">>> ")?;
            self.clear()?;

            match choice.as_str() {
                "1" => self.clients_menu().await?,
                "2" => self.orders_menu().await?,
                "3" => self.settings_menu()?,
                "0" => {
                    writeln!(self.out, "Saliendo.")?;
                    return Ok(());
                }
                _ => self.warn("Opción no reconocida, inténtalo de nuevo.")?,
            }
        }
    }

    fn settings_menu(&mut self) -> ConsoleResult<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", "Ajustes de visualización:".bright_green().bold())?;
            writeln!(
                self.out,
                "  1) Tablas visibles: {}",
                on_off(self.settings.show_tables)
            )?;
            writeln!(
                self.out,
                "  2) Limpiar pantalla: {}",
                on_off(self.settings.clear_screen)
            )?;
            writeln!(self.out, "  0) Atrás")?;
            let choice = self.prompt(">>> ")?;

            match choice.as_str() {
                "1" => self.settings.show_tables = !self.settings.show_tables,
                "2" => self.settings.clear_screen = !self.settings.clear_screen,
                "0" => return Ok(()),
                _ => self.warn("Opción no reconocida.")?,
            }
        }
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        if self.settings.clear_screen {
            write!(self.out, "\x1b[H\x1b[2J")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> ConsoleResult<String> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        match self.input.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(ConsoleError::InputClosed),
        }
    }

    /// Valor no vacío; con `allow_dash` el centinela `"-"` también vale.
    fn read_required(&mut self, message: &str, allow_dash: bool) -> ConsoleResult<String> {
        loop {
            let value = self.prompt(message)?;
            let is_dash = value == SKIP_SENTINEL;
            if !value.is_empty() && (allow_dash || !is_dash) {
                return Ok(value);
            }
            self.warn("Hace falta un valor, inténtalo de nuevo.")?;
        }
    }

    /// Id numérico; `None` si el usuario escribe `"-"`.
    fn read_id(&mut self, message: &str) -> ConsoleResult<Option<i32>> {
        loop {
            let value = self.prompt(message)?;
            if value == SKIP_SENTINEL {
                return Ok(None);
            }
            match value.parse::<i32>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => self.warn("Formato de número inválido, inténtalo de nuevo.")?,
            }
        }
    }

    /// Importe; vacío o `"-"` devuelve `None` (valor por defecto).
    fn read_decimal(&mut self, message: &str) -> ConsoleResult<Option<Decimal>> {
        loop {
            let value = self.prompt(message)?;
            if value.is_empty() || value == SKIP_SENTINEL {
                return Ok(None);
            }
            match Decimal::from_str(&value) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => self.warn("Formato de número inválido, inténtalo de nuevo.")?,
            }
        }
    }

    /// Estado por número (1-4) o por nombre. `"-"` devuelve `None`; una
    /// línea vacía también, salvo que `empty_is_default` sea falso.
    fn read_status(
        &mut self,
        message: &str,
        empty_is_default: bool,
    ) -> ConsoleResult<Option<OrderStatus>> {
        let options: Vec<String> = OrderStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}) {}", i + 1, s))
            .collect();

        loop {
            writeln!(self.out, "  {}", options.join("  "))?;
            let value = self.prompt(message)?;
            if value == SKIP_SENTINEL || (value.is_empty() && empty_is_default) {
                return Ok(None);
            }

            let by_number = value
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| OrderStatus::ALL.get(i).copied());

            match by_number.or_else(|| value.parse::<OrderStatus>().ok()) {
                Some(status) => return Ok(Some(status)),
                None => self.warn("Estado desconocido, elige uno de la lista.")?,
            }
        }
    }

    fn warn(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.out, "{}", message.yellow())?;
        Ok(())
    }

    fn report_error(&mut self, error: &AppError) -> ConsoleResult<()> {
        debug!("Operación de consola fallida: {}", error);
        writeln!(self.out, "{} {}", "❌ Error:".red().bold(), error)?;
        Ok(())
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "activado"
    } else {
        "desactivado"
    }
}
