//! # Simple Web - Servidor
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.0.

use clap::Parser;
use simple_web::config::ServerConfig;
use simple_web::server::Server;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    config.print_summary();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    // Esto bloquea el thread para siempre
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
