//! # Navegador interactivo
//! src/bin/web_browser.rs
//!
//! Arma un GET o un POST desde la terminal, lo envía y muestra la
//! respuesta.

use clap::Parser;
use simple_web::client::{exchange, prompt::prompt_request};
use simple_web::config::ClientConfig;
use simple_web::error::ClientError;
use std::io;

fn run(config: &ClientConfig) -> Result<(), ClientError> {
    let request = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        prompt_request(&mut input, &mut output)?
    };

    let response = exchange(config.address(), &request)?;
    print!("{}", response.summary());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ClientConfig::parse();
    if let Err(e) = run(&config) {
        eprintln!("💥 Error: {}", e);
        std::process::exit(1);
    }
}
