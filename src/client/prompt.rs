//! # Navegador interactivo
//! src/client/prompt.rs
//!
//! Pregunta el tipo de request y arma el [`ClientRequest`]. Es genérico
//! sobre la entrada y la salida para poder probarlo sin una terminal.

use super::ClientRequest;
use crate::error::ClientError;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Clave externa del JSON que manda el formulario
pub const FORM_KEY: &str = "viking";

/// Formulario que se envía por POST
#[derive(Debug, Clone, Serialize)]
pub struct VikingForm {
    pub name: String,
    pub email: String,
}

/// Pide `[1] GET - [2] POST` hasta recibir una opción válida y luego
/// los datos de ese request
pub fn prompt_request<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ClientRequest, ClientError> {
    let choice = loop {
        let answer = ask(input, output, "\nChoose your request type ([1] GET - [2] POST): ")?;
        match answer.trim() {
            "1" | "2" => break answer,
            _ => writeln!(output, "Invalid type! Try again...")?,
        }
    };

    if choice.trim() == "1" {
        let resource = ask(input, output, "\nEnter the filename/resource to GET (format: name.ext): ")?;
        return Ok(ClientRequest::get(&resource));
    }

    let name = ask(input, output, "\nEnter the Viking's name: ")?;
    let email = ask(input, output, "\nEnter the Viking's e-mail: ")?;
    ClientRequest::post_form(FORM_KEY, &VikingForm { name, email })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String, ClientError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ClientError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
