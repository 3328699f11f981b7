//! # Configuración
//! src/config.rs
//!
//! Configuración del servidor y de los clientes, con soporte para
//! argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./simple_web --port 3000 --root ./public --template ./public/thanks.html
//! ./web_browser --host localhost --port 3000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_ROOT=/srv/www ./simple_web
//! HTTP_HOST=10.0.0.2 ./simple_client
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor HTTP/1.0
#[derive(Debug, Clone, Parser)]
#[command(name = "simple_web")]
#[command(about = "Servidor HTTP/1.0: sirve archivos (GET) y agradece formularios JSON (POST)")]
#[command(version = "0.1.0")]
pub struct ServerConfig {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "3000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio contra el que se resuelven los paths de GET
    #[arg(long, default_value = ".", env = "HTTP_ROOT")]
    pub root: PathBuf,

    /// Template HTML para las respuestas a POST
    #[arg(long, default_value = "./thanks.html", env = "HTTP_TEMPLATE")]
    pub template: PathBuf,
}

impl ServerConfig {
    /// Dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web::config::ServerConfig;
    ///
    /// let config = ServerConfig::default();
    /// assert_eq!(config.address(), "0.0.0.0:3000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// El template no se valida acá: se lee en cada POST y si falta
    /// la respuesta es un 500.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be > 0".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if !self.root.is_dir() {
            return Err(format!("Root {} is not a directory", self.root.display()));
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("=================================");
        println!("  Simple Web HTTP/1.0 Server");
        println!("=================================");
        println!();
        println!("⚙️  Configuración:");
        println!("   Address:   {}", self.address());
        println!("   Root:      {}", self.root.display());
        println!("   Template:  {}", self.template.display());
        println!();
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            root: PathBuf::from("."),
            template: PathBuf::from("./thanks.html"),
        }
    }
}

/// Configuración de los clientes (a qué servidor conectarse)
#[derive(Debug, Clone, Parser)]
#[command(about = "Cliente HTTP/1.0 de un solo request")]
#[command(version = "0.1.0")]
pub struct ClientConfig {
    /// Host del servidor
    #[arg(long, default_value = "localhost", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto del servidor
    #[arg(short, long, default_value = "3000", env = "HTTP_PORT")]
    pub port: u16,
}

impl ClientConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
        }
    }
}
