//! # Un intercambio request/respuesta
//! src/client/connection.rs

use super::{ClientRequest, ReceivedResponse};
use crate::error::ClientError;
use log::debug;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

/// Conecta, envía el request, cierra el lado de escritura y lee la
/// respuesta hasta que el servidor cierra la conexión
///
/// No hay timeouts: si el servidor nunca cierra, esta llamada bloquea.
pub fn exchange<A: ToSocketAddrs>(addr: A, request: &ClientRequest) -> Result<ReceivedResponse, ClientError> {
    let mut stream = TcpStream::connect(addr)?;
    debug!("Connected to {}", stream.peer_addr()?);

    stream.write_all(&request.to_bytes())?;
    stream.flush()?;
    stream.shutdown(Shutdown::Write)?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw)?;
    debug!("Received {} bytes", raw.len());

    ReceivedResponse::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_exchange_with_canned_server() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).unwrap();
            stream
                .write_all(b"HTTP/1.0 200 OK\r\nContent-type: text/html\r\nContent-Length: 2\r\n\r\nok")
                .unwrap();
            received
        });

        let response = exchange(addr, &ClientRequest::get("ping")).unwrap();
        let received = t.join().unwrap();

        assert_eq!(received, b"GET /ping HTTP/1.0\r\n\r\n");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, b"ok");
    }
}
