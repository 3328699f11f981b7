//! # Handlers
//!
//! - `files`: GET, sirve archivos desde el directorio raíz
//! - `form`: POST, renderiza el template de agradecimiento

pub mod files;
pub mod form;

pub use files::get_handler;
pub use form::post_handler;
