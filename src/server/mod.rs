//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta una conexión a la vez
//! 3. Lee y parsea un request HTTP
//! 4. Genera y envía la respuesta, y cierra la conexión

pub mod tcp;

pub use tcp::Server;
