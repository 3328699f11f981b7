//! # Clientes
//!
//! - `request` / `response`: formato de lo que se envía y se recibe
//! - `connection`: un intercambio completo sobre TCP
//! - `prompt`: el navegador interactivo
//! - `lines`: cliente de diagnóstico que imprime lo que llega

pub mod connection;
pub mod lines;
pub mod prompt;
pub mod request;
pub mod response;

pub use connection::exchange;
pub use request::ClientRequest;
pub use response::ReceivedResponse;
