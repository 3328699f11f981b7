//! # Módulo HTTP
//!
//! Subconjunto de HTTP/1.0 (RFC 1945) implementado desde cero:
//!
//! - Parsing de requests (request line, headers, body)
//! - Construcción de responses
//! - Status codes
//!
//! Sin conexiones persistentes, sin chunked transfer encoding: un
//! request y una respuesta por conexión.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /README.md HTTP/1.0\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-type: text/html\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```

pub mod request;
pub mod response;
pub mod status;

pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
