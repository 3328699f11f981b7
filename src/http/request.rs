//! # Parsing de Requests HTTP/1.0
//! src/http/request.rs
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /simple_server.rb HTTP/1.0\r\n
//! Content-Length: 47\r\n
//! \r\n
//! {"viking":{"name":"Erik","email":"erik@x.com"}}
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD PATH VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: solo para POST
//!
//! Hay dos entradas: [`Request::parse`] para un buffer completo y
//! [`Request::read_from`] para leer directamente del socket.

use super::StatusCode;
use crate::error::ServerError;
use regex::Regex;
use std::io::{BufRead, Read};
use std::sync::OnceLock;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un archivo
    GET,

    /// HEAD - Como GET pero sin body
    HEAD,

    /// POST - Enviar un formulario JSON
    POST,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, HEAD, POST)
    method: Method,

    /// Path tal como vino en la request line (ej: "/README.md")
    path: String,

    /// Versión HTTP (ej: "HTTP/1.0"), se repite en la respuesta
    version: String,

    /// Bloque de headers sin procesar (todo lo que hay entre la
    /// request line y la línea vacía)
    raw_headers: String,

    /// Headers en orden de llegada
    headers: Vec<(String, String)>,

    /// Body del request, vacío salvo en POST
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Request vacío (el peer cerró sin mandar nada)
    #[error("Empty request")]
    EmptyRequest,

    /// La request line no cumple `METHOD PATH HTTP/x.y`
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// Header sin ':'
    #[error("Invalid header: {0:?}")]
    InvalidHeader(String),

    /// Content-Length que no es un entero
    #[error("Invalid Content-Length: {0:?}")]
    InvalidContentLength(String),

    /// Método con formato válido que el servidor no despacha
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl ParseError {
    /// Código con el que se responde a un request que no se pudo parsear
    pub fn status_code(&self) -> StatusCode {
        match self {
            ParseError::UnsupportedMethod(_) => StatusCode::NotImplemented,
            ParseError::EmptyRequest
            | ParseError::InvalidRequestLine(_)
            | ParseError::InvalidHeader(_)
            | ParseError::InvalidContentLength(_) => StatusCode::BadRequest,
        }
    }
}

/// Request line ya validada, antes de leer el body
struct RequestHead {
    method: Method,
    path: String,
    version: String,
    raw_headers: String,
    headers: Vec<(String, String)>,
}

fn request_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Z]+) (\S+) (HTTP/\d+\.\d+)$").expect("request line regex is valid")
    })
}

impl Request {
    /// Parsea un request completo desde bytes
    ///
    /// El body es todo lo que sigue a `\r\n\r\n`, recortado al
    /// `Content-Length` si el header está presente.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use simple_web::http::Request;
    ///
    /// let raw = b"GET /README.md HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/README.md");
    /// assert_eq!(request.version(), "HTTP/1.0");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let (head, body) = match find_subsequence(buffer, b"\r\n\r\n") {
            Some(pos) => (&buffer[..pos], &buffer[pos + 4..]),
            None => (buffer, &[][..]),
        };

        let head = Self::parse_head(head)?;
        let mut body = match head.method {
            Method::POST => body.to_vec(),
            Method::GET | Method::HEAD => Vec::new(),
        };
        if let Some(len) = content_length(&head.headers)? {
            body.truncate(len);
        }

        Ok(Self::from_head(head, body))
    }

    /// Lee un request directamente de un stream
    ///
    /// Lee líneas hasta la línea vacía. Después lee el body:
    /// exactamente `Content-Length` bytes si el header existe, o hasta
    /// que el peer cierre su lado de escritura si es un POST sin
    /// `Content-Length`. Sin timeouts: un peer silencioso bloquea.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ServerError> {
        let mut head = Vec::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line == b"\r\n" || line == b"\n" {
                break;
            }
            head.extend_from_slice(&line);
        }

        let head = Self::parse_head(&head)?;
        let body = match (content_length(&head.headers)?, head.method) {
            (Some(len), _) => {
                // El largo lo declara el peer: no se reserva memoria por adelantado
                let mut body = Vec::new();
                reader.take(len as u64).read_to_end(&mut body)?;
                body
            }
            (None, Method::POST) => {
                let mut body = Vec::new();
                reader.read_to_end(&mut body)?;
                body
            }
            (None, _) => Vec::new(),
        };

        Ok(Self::from_head(head, body))
    }

    fn from_head(head: RequestHead, body: Vec<u8>) -> Self {
        Request {
            method: head.method,
            path: head.path,
            version: head.version,
            raw_headers: head.raw_headers,
            headers: head.headers,
            body,
        }
    }

    /// Parsea la request line y los headers (sin el separador final)
    fn parse_head(head: &[u8]) -> Result<RequestHead, ParseError> {
        let text = std::str::from_utf8(head)
            .map_err(|_| ParseError::InvalidRequestLine(String::from_utf8_lossy(head).into_owned()))?;

        if text.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let (request_line, raw_headers) = match text.find('\n') {
            Some(pos) => (&text[..pos], &text[pos + 1..]),
            None => (text, ""),
        };

        let (method, path, version) = Self::parse_request_line(request_line.trim_end_matches('\r'))?;
        let headers = Self::parse_headers(raw_headers)?;

        Ok(RequestHead {
            method,
            path,
            version,
            raw_headers: raw_headers.to_string(),
            headers,
        })
    }

    /// Formato: `GET /path HTTP/1.0`
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let caps = request_line_regex()
            .captures(line)
            .ok_or_else(|| ParseError::InvalidRequestLine(line.to_string()))?;

        let method = Method::from_str(&caps[1])?;
        Ok((method, caps[2].to_string(), caps[3].to_string()))
    }

    /// Cada header tiene formato: "Name: Value"
    fn parse_headers(raw: &str) -> Result<Vec<(String, String)>, ParseError> {
        let mut headers = Vec::new();

        for line in raw.lines() {
            if line.trim().is_empty() {
                break;
            }
            match line.split_once(':') {
                Some((name, value)) => {
                    headers.push((name.trim().to_string(), value.trim().to_string()));
                }
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el bloque de headers sin procesar
    pub fn raw_headers(&self) -> &str {
        &self.raw_headers
    }

    /// Obtiene un header específico (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

fn content_length(headers: &[(String, String)]) -> Result<Option<usize>, ParseError> {
    match find_header(headers, "Content-Length") {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ParseError::InvalidContentLength(value.to_string())),
        None => Ok(None),
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
