//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.0
//! y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-type: text/html\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! Los headers se escriben en el orden en que se agregaron.

use super::StatusCode;

/// Versión que se usa cuando no hay un request del cual copiarla
pub const DEFAULT_VERSION: &str = "HTTP/1.0";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Versión del status line (se copia del request)
    version: String,

    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers en orden de escritura
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// assert_eq!(response.version(), "HTTP/1.0");
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Respuesta `text/html` con el body dado
    ///
    /// Es la única forma de respuesta que emite el servidor:
    /// `Content-type` primero y `Content-Length` después.
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web::http::{Response, StatusCode};
    ///
    /// let response = Response::html(StatusCode::Ok, b"hello".to_vec());
    /// let text = String::from_utf8(response.to_bytes()).unwrap();
    /// assert_eq!(
    ///     text,
    ///     "HTTP/1.0 200 OK\r\nContent-type: text/html\r\nContent-Length: 5\r\n\r\nhello"
    /// );
    /// ```
    pub fn html(status: StatusCode, body: Vec<u8>) -> Self {
        Self::new(status)
            .with_header("Content-type", "text/html")
            .with_body_bytes(body)
    }

    /// Respuesta de error con un mensaje en texto plano como body
    pub fn error(status: StatusCode, message: &str) -> Self {
        Self::html(status, message.as_bytes().to_vec())
    }

    /// Cambia la versión del status line
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe en su misma posición.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el cuerpo y recalcula `Content-Length`
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let len = self.body.len().to_string();
        self.add_header("Content-Length", &len);
        self
    }

    /// Quita el body pero conserva `Content-Length` (para HEAD)
    pub fn without_body(mut self) -> Self {
        self.body.clear();
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(format!("{} {}\r\n", self.version, self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene la versión del status line
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene un header por nombre (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene los headers en orden
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_html_header_order() {
        let response = Response::html(StatusCode::Ok, b"hi".to_vec());
        let names: Vec<&str> = response.headers().iter().map(|(n, _)| n.as_str()).collect();

        assert_eq!(names, vec!["Content-type", "Content-Length"]);
        assert_eq!(response.header("content-length"), Some("2"));
    }

    #[test]
    fn test_content_length_matches_body() {
        let body = "héllo wörld".as_bytes().to_vec();
        let expected = body.len().to_string();
        let response = Response::html(StatusCode::Ok, body);

        assert_eq!(response.header("Content-Length"), Some(expected.as_str()));
    }

    #[test]
    fn test_with_header_overwrites_in_place() {
        let response = Response::new(StatusCode::Ok)
            .with_header("A", "1")
            .with_header("B", "2")
            .with_header("a", "3");

        assert_eq!(
            response.headers(),
            &[("A".to_string(), "3".to_string()), ("B".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_with_version() {
        let response = Response::error(StatusCode::NotFound, "nope").with_version("HTTP/1.1");
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.ends_with("\r\n\r\nnope"));
    }

    #[test]
    fn test_without_body_keeps_length() {
        let response = Response::html(StatusCode::Ok, b"12345".to_vec()).without_body();
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.contains("Content-Length: 5\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_binary_body() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::html(StatusCode::Ok, binary_data.clone());

        assert!(response.to_bytes().ends_with(&binary_data));
        assert_eq!(response.header("Content-Length"), Some("4"));
    }
}
