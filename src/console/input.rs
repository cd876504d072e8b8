//! Fuentes de entrada de la consola.
//!
//! La consola no lee de `stdin` directamente: recibe un `InputSource`.
//! En producción es `StdinInput`; en tests, `ScriptedInput` con las
//! líneas preparadas de antemano.

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub trait InputSource {
    /// Siguiente línea sin el salto final; `None` cuando la entrada se cerró.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Entrada estándar del proceso
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Líneas predefinidas, consumidas en orden
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
