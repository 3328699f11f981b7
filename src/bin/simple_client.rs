//! # Cliente de diagnóstico
//! src/bin/simple_client.rs
//!
//! Se conecta e imprime cada línea que manda el peer, sin enviar nada.

use clap::Parser;
use simple_web::client::lines::print_lines;
use simple_web::config::ClientConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ClientConfig::parse();
    let mut out = std::io::stdout().lock();

    match print_lines(config.address(), &mut out) {
        Ok(count) => log::info!("{} line(s) received", count),
        Err(e) => {
            eprintln!("💥 Error: {}", e);
            std::process::exit(1);
        }
    }
}
