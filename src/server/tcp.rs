//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Un solo worker: acepta una conexión, lee un request, responde, cierra
//! la conexión y vuelve a aceptar. Mientras se atiende una conexión, las
//! siguientes esperan en la cola de accept del sistema operativo.
//!
//! ```text
//! Listening → Accepting → Reading-Request → Dispatching
//!     ↑                                         ↓
//!     └──────── Closing ← Writing-Response ←────┘
//! ```

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::{ParseError, Request};
use crate::router::Router;
use log::{debug, error, info, warn};
use std::io::{BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::Instant;

/// Servidor HTTP/1.0 de una conexión a la vez
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Hace bind en la dirección de la configuración
    pub fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let address = config.address();
        info!("Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        Ok(Self::from_listener(listener, Router::from_config(config)))
    }

    /// Usa un listener ya abierto (útil para puertos efímeros)
    pub fn from_listener(listener: TcpListener, router: Router) -> Self {
        Self { listener, router }
    }

    /// Dirección real en la que escucha
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept; no termina nunca
    ///
    /// Un error de `accept` (ej: `ECONNABORTED`, `EMFILE`) se registra y
    /// se sigue esperando la próxima conexión.
    pub fn run(&self) -> Result<(), ServerError> {
        info!("Server initialized on {}", self.local_addr()?);

        loop {
            info!("Waiting for a connection...");
            if let Err(e) = self.accept_one() {
                error!("Error al aceptar conexión: {}", e);
            }
        }
    }

    /// Acepta y atiende exactamente una conexión
    ///
    /// Los errores de la conexión se registran y no se propagan; solo
    /// un fallo de `accept` devuelve error.
    pub fn accept_one(&self) -> Result<(), ServerError> {
        let (stream, peer) = self.listener.accept()?;
        info!("Connection accepted from {}", peer);

        if let Err(e) = Self::handle_connection(stream, &self.router) {
            error!("Connection with {} failed: {}", peer, e);
        }
        Ok(())
    }

    /// Lee un request, lo despacha y escribe la respuesta
    ///
    /// La conexión se cierra al soltar `stream`.
    pub fn handle_connection(stream: TcpStream, router: &Router) -> Result<(), ServerError> {
        let start = Instant::now();
        let mut reader = BufReader::new(&stream);

        let response = match Request::read_from(&mut reader) {
            Ok(request) => {
                info!("Request received - {} {}", request.method().as_str(), request.path());
                router.route(&request)
            }
            Err(ServerError::Parse(ParseError::EmptyRequest)) => {
                info!("Peer closed without sending a request");
                return Ok(());
            }
            Err(ServerError::Parse(e)) => {
                warn!("Parse error: {}", e);
                router.reject(&e)
            }
            Err(e) => return Err(e),
        };

        let status = response.status();
        if status.is_server_error() {
            error!("Sending response to the client: {}", status);
        } else if status.is_client_error() {
            warn!("Sending response to the client: {}", status);
        } else {
            info!("Sending response to the client: {}", status);
        }
        let mut writer = &stream;
        writer.write_all(&response.to_bytes())?;
        writer.flush()?;

        info!("Closing the connection...");
        debug!("Exchange took {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use std::net::Shutdown;
    use std::thread;
    use tempfile::TempDir;

    fn ephemeral_server(dir: &TempDir) -> Server {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let router = Router::new(dir.path(), dir.path().join("thanks.html"));
        Server::from_listener(listener, router)
    }

    fn exchange(addr: SocketAddr, raw: &[u8]) -> String {
        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_handle_connection_get_ok() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "hello").unwrap();
        let server = ephemeral_server(&dir);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || server.accept_one().unwrap());
        let text = exchange(addr, b"GET /README.md HTTP/1.0\r\n\r\n");
        t.join().unwrap();

        assert_eq!(
            text,
            "HTTP/1.0 200 OK\r\nContent-type: text/html\r\nContent-Length: 5\r\n\r\nhello"
        );
    }

    #[test]
    fn test_handle_connection_parse_error() {
        let dir = TempDir::new().unwrap();
        let server = ephemeral_server(&dir);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || server.accept_one().unwrap());
        let text = exchange(addr, b"\x00\x01\x02\x03garbage");
        t.join().unwrap();

        assert!(text.starts_with("HTTP/1.0 400 Bad Request\r\n"));
        assert!(text.contains("Invalid request:"));
    }

    #[test]
    fn test_handle_connection_unsupported_method() {
        let dir = TempDir::new().unwrap();
        let server = ephemeral_server(&dir);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || server.accept_one().unwrap());
        let text = exchange(addr, b"DELETE /x HTTP/1.0\r\n\r\n");
        t.join().unwrap();

        assert!(text.starts_with("HTTP/1.0 501 Not Implemented\r\n"));
    }

    #[test]
    fn test_server_survives_bad_request() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "still here").unwrap();
        let server = ephemeral_server(&dir);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || {
            server.accept_one().unwrap();
            server.accept_one().unwrap();
        });

        let first = exchange(addr, b"not http at all\r\n\r\n");
        let second = exchange(addr, b"GET /a.txt HTTP/1.0\r\n\r\n");
        t.join().unwrap();

        assert!(first.contains("400 Bad Request"));
        assert!(second.ends_with("\r\n\r\nstill here"));
    }

    #[test]
    fn test_huge_content_length_does_not_kill_server() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("thanks.html"), "<%= yield %>").unwrap();
        let server = ephemeral_server(&dir);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || server.accept_one().is_ok());
        let text = exchange(
            addr,
            b"POST /x HTTP/1.0\r\nContent-Length: 18446744073709551615\r\n\r\n{}",
        );

        assert!(t.join().unwrap(), "accept_one must return Ok");
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.ends_with("Content-Length: 0\r\n\r\n"));
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        let dir = TempDir::new().unwrap();
        let server = ephemeral_server(&dir);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || server.accept_one().unwrap());

        // Cliente que conecta y cierra sin mandar datos
        drop(TcpStream::connect(addr).unwrap());

        t.join().unwrap();
    }
}
