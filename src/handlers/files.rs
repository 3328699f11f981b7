//! # GET: servir archivos
//! src/handlers/files.rs
//!
//! El path del request se toma literal (sin decodificar, sin separar
//! query) y se resuelve relativo al directorio raíz configurado.

use crate::http::{Request, Response, StatusCode};
use log::{info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Body fijo de las respuestas 404
pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found at the specified location";

/// Resuelve `path` contra `root`
///
/// # Ejemplo
/// ```
/// use simple_web::handlers::files::resolve;
/// use std::path::Path;
///
/// assert_eq!(resolve(Path::new("/srv"), "/docs/a.txt"), Path::new("/srv/docs/a.txt"));
/// ```
pub fn resolve(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}

/// Handler de GET
///
/// 200 con el contenido del archivo si existe y es un archivo regular,
/// 404 con [`NOT_FOUND_MESSAGE`] en cualquier otro caso.
pub fn get_handler(req: &Request, root: &Path) -> Response {
    let filename = resolve(root, req.path());

    if !filename.is_file() {
        info!("File requested not found: {}", filename.display());
        return Response::error(StatusCode::NotFound, NOT_FOUND_MESSAGE);
    }

    match fs::read(&filename) {
        Ok(contents) => {
            info!("File requested exists: {}", filename.display());
            Response::html(StatusCode::Ok, contents)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Response::error(StatusCode::NotFound, NOT_FOUND_MESSAGE)
        }
        Err(e) => {
            warn!("Could not read {}: {}", filename.display(), e);
            Response::error(StatusCode::InternalServerError, "The requested resource could not be read")
        }
    }
}
