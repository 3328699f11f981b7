//! # Despacho de Requests
//! src/router/mod.rs
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router despacha por método: GET y HEAD van al handler de archivos,
//! POST al de formularios. La respuesta siempre repite la versión HTTP
//! del request.

use crate::config::ServerConfig;
use crate::handlers::{get_handler, post_handler};
use crate::http::{Method, ParseError, Request, Response};
use std::path::PathBuf;

/// Router que conoce el directorio raíz y el template
pub struct Router {
    /// Directorio raíz para GET
    root: PathBuf,

    /// Template para POST
    template: PathBuf,
}

impl Router {
    pub fn new(root: impl Into<PathBuf>, template: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template: template.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.root.clone(), config.template.clone())
    }

    /// Ejecuta el handler que corresponde al método del request
    ///
    /// # Ejemplo
    /// ```no_run
    /// use simple_web::router::Router;
    /// use simple_web::http::Request;
    ///
    /// let router = Router::new(".", "./thanks.html");
    /// let request = Request::parse(b"GET /README.md HTTP/1.0\r\n\r\n").unwrap();
    /// let response = router.route(&request);
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        let response = match request.method() {
            Method::GET => get_handler(request, &self.root),
            Method::HEAD => get_handler(request, &self.root).without_body(),
            Method::POST => post_handler(request, &self.template),
        };
        response.with_version(request.version())
    }

    /// Respuesta para un request que no se pudo parsear
    pub fn reject(&self, error: &ParseError) -> Response {
        Response::error(error.status_code(), &format!("Invalid request: {}", error))
    }
}
