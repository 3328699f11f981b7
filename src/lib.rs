//! # Simple Web
//! src/lib.rs
//!
//! Intercambio HTTP/1.0 mínimo sobre sockets TCP: un servidor que
//! atiende una conexión a la vez y dos clientes.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de requests, construcción de responses, status codes
//! - `config`: Configuración por CLI y variables de entorno
//! - `router`: Despacho por método a los handlers
//! - `handlers`: GET (archivos) y POST (template de agradecimiento)
//! - `server`: Loop de accept de un solo worker
//! - `client`: Navegador interactivo y cliente de diagnóstico
//! - `error`: Tipos de error
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use simple_web::config::ServerConfig;
//! use simple_web::server::Server;
//!
//! let config = ServerConfig::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run().expect("Error en el loop de accept");
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
