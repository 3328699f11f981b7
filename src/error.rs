//! # Errores del crate
//! src/error.rs

use crate::http::ParseError;

/// Errores al atender una conexión
///
/// Ninguno es fatal para el servidor: el loop de accept los registra y
/// sigue con la próxima conexión.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed request: {0}")]
    Parse(#[from] ParseError),
}

/// Errores de los clientes
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not encode request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("input closed before a request was chosen")]
    InputClosed,
}
