//! # Respuestas recibidas por el cliente
//! src/client/response.rs
//!
//! El `Content-Length` declarado se reporta tal cual: no se compara con
//! el largo real del body, y no hay soporte para chunked ni para
//! respuestas sin terminar.

use crate::error::ClientError;
use regex::Regex;
use std::sync::OnceLock;

fn status_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(HTTP/[\d.]+) (\d{3}) ([\w ]*)$").expect("status line regex is valid")
    })
}

/// Respuesta tal como llegó del servidor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedResponse {
    pub version: String,
    pub status_code: u16,
    pub reason: String,
    /// `Content-Length` declarado, si vino
    pub content_length: Option<usize>,
    pub body: Vec<u8>,
}

impl ReceivedResponse {
    /// Separa headers y body en la primera línea vacía y extrae el
    /// status line y el `Content-Length`
    pub fn parse(raw: &[u8]) -> Result<Self, ClientError> {
        let (head, body) = match raw.windows(4).position(|w| w == b"\r\n\r\n") {
            Some(pos) => (&raw[..pos], &raw[pos + 4..]),
            None => (raw, &[][..]),
        };
        let head = String::from_utf8_lossy(head);
        let mut lines = head.split("\r\n");

        let status_line = lines.next().unwrap_or_default();
        let caps = status_line_regex()
            .captures(status_line)
            .ok_or_else(|| ClientError::MalformedResponse(format!("bad status line {:?}", status_line)))?;

        let status_code: u16 = caps[2]
            .parse()
            .map_err(|_| ClientError::MalformedResponse(format!("bad status code {:?}", &caps[2])))?;

        let mut content_length = None;
        for line in lines {
            if let Some((name, value)) = line.split_once(':') {
                if name.trim().eq_ignore_ascii_case("Content-Length") {
                    let value = value.trim();
                    let len: usize = value
                        .parse()
                        .map_err(|_| ClientError::MalformedResponse(format!("bad Content-Length {:?}", value)))?;
                    content_length = Some(len);
                }
            }
        }

        Ok(Self {
            version: caps[1].to_string(),
            status_code,
            reason: caps[3].to_string(),
            content_length,
            body: body.to_vec(),
        })
    }

    /// Texto que imprime el navegador interactivo
    pub fn summary(&self) -> String {
        let size = match self.content_length {
            Some(len) => len.to_string(),
            None => "an unknown number of".to_string(),
        };
        let label = if self.status_code == 200 {
            "Content received:"
        } else {
            "Description message:"
        };

        format!(
            "\nReceived {} characters from the server\nStatus code: {} - {}\n\n{}\n{}\n\nConnection ended.\n",
            size,
            self.status_code,
            self.reason,
            label,
            String::from_utf8_lossy(&self.body)
        )
    }
}
