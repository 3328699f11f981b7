//! # Cliente de diagnóstico
//! src/client/lines.rs
//!
//! No manda ningún request: copia cada línea que envía el peer hasta
//! que cierre la conexión.

use crate::error::ClientError;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};

/// Escribe en `out` cada línea recibida (sin su terminador) y retorna
/// cuántas líneas leyó
pub fn print_lines<A: ToSocketAddrs, W: Write>(addr: A, out: &mut W) -> Result<usize, ClientError> {
    let stream = TcpStream::connect(addr)?;
    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        let text = text.strip_suffix(b"\r").unwrap_or(text);

        out.write_all(text)?;
        out.write_all(b"\n")?;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}
