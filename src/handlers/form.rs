//! # POST: página de agradecimiento
//! src/handlers/form.rs
//!
//! El body del POST es un objeto JSON cuyos valores son a su vez objetos:
//!
//! ```text
//! {"viking": {"name": "Erik", "email": "erik@x.com"}}
//! ```
//!
//! Cada campo interno se convierte en `<li>Name: Erik</li>` y la lista
//! reemplaza al placeholder del template.

use crate::http::{Request, Response, StatusCode};
use log::{info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Marcador del template que se reemplaza con la lista
pub const PLACEHOLDER: &str = "<%= yield %>";

/// Errores al interpretar el body de un POST
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("body is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value of {0:?} is not a JSON object")]
    Shape(String),
}

/// Aplana `{outer: {campo: valor}}` en pares `(campo, valor)`
///
/// Los strings se devuelven sin comillas, el resto de los valores
/// con su texto JSON.
pub fn parse_form(body: &[u8]) -> Result<Vec<(String, String)>, FormError> {
    let params: Map<String, Value> = serde_json::from_slice(body)?;
    let mut fields = Vec::new();

    for (outer, value) in params {
        let Value::Object(inner) = value else {
            return Err(FormError::Shape(outer));
        };
        for (key, value) in inner {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            fields.push((key, text));
        }
    }

    Ok(fields)
}

/// Primera letra en mayúscula, el resto en minúscula
///
/// # Ejemplo
/// ```
/// use simple_web::handlers::form::capitalize;
///
/// assert_eq!(capitalize("email"), "Email");
/// assert_eq!(capitalize("NAME"), "Name");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// `<li>Key: value</li>` por cada campo, sin separadores
pub fn render_items(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("<li>{}: {}</li>", capitalize(key), value))
        .collect()
}

/// Reemplaza todas las apariciones de [`PLACEHOLDER`]
pub fn render_template(template: &str, items: &str) -> String {
    template.replace(PLACEHOLDER, items)
}

/// Handler de POST
///
/// El template se lee en cada request.
pub fn post_handler(req: &Request, template_path: &Path) -> Response {
    let fields = match parse_form(req.body()) {
        Ok(fields) => fields,
        Err(e) => {
            warn!("Rejected POST body: {}", e);
            return Response::error(StatusCode::BadRequest, &format!("Invalid form data: {}", e));
        }
    };

    let template = match fs::read_to_string(template_path) {
        Ok(template) => template,
        Err(e) => {
            warn!("Could not read template {}: {}", template_path.display(), e);
            return Response::error(StatusCode::InternalServerError, "The response template is not available");
        }
    };

    info!("Rendering {} field(s) into {}", fields.len(), template_path.display());
    let body = render_template(&template, &render_items(&fields));
    Response::html(StatusCode::Ok, body.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn post(body: &str) -> Request {
        let raw = format!(
            "POST /simple_server.rb HTTP/1.0\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        Request::parse(raw.as_bytes()).unwrap()
    }

    fn template_dir(contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("thanks.html"), contents).unwrap();
        dir
    }

    // ==================== parse_form ====================

    #[test]
    fn test_parse_form_keeps_order() {
        let fields = parse_form(br#"{"viking":{"name":"Erik","email":"erik@x.com"}}"#).unwrap();

        assert_eq!(
            fields,
            vec![
                ("name".to_string(), "Erik".to_string()),
                ("email".to_string(), "erik@x.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_form_flattens_every_outer_key() {
        let fields = parse_form(br#"{"a":{"x":"1"},"b":{"y":2,"z":true}}"#).unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], ("y".to_string(), "2".to_string()));
        assert_eq!(fields[2], ("z".to_string(), "true".to_string()));
    }

    #[test]
    fn test_parse_form_rejects_invalid_json() {
        assert!(matches!(parse_form(b"{not json"), Err(FormError::Json(_))));
        assert!(matches!(parse_form(b"[1,2]"), Err(FormError::Json(_))));
    }

    #[test]
    fn test_parse_form_rejects_flat_values() {
        let result = parse_form(br#"{"name":"Erik"}"#);
        assert!(matches!(result, Err(FormError::Shape(key)) if key == "name"));
    }

    // ==================== render ====================

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("eMAIL"), "Email");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ñandú"), "Ñandú");
    }

    #[test]
    fn test_render_template_replaces_all() {
        let out = render_template("<ul><%= yield %></ul><%= yield %>", "<li>A: b</li>");
        assert_eq!(out, "<ul><li>A: b</li></ul><li>A: b</li>");
    }

    // ==================== handler ====================

    #[test]
    fn test_post_handler_renders_list() {
        let dir = template_dir("<html><ul><%= yield %></ul></html>");
        let req = post(r#"{"viking":{"name":"Erik","email":"erik@x.com"}}"#);

        let response = post_handler(&req, &dir.path().join("thanks.html"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(
            response.body(),
            b"<html><ul><li>Name: Erik</li><li>Email: erik@x.com</li></ul></html>"
        );
    }

    #[test]
    fn test_post_handler_bad_json() {
        let dir = template_dir("<%= yield %>");
        let response = post_handler(&post("nope"), &dir.path().join("thanks.html"));

        assert_eq!(response.status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_post_handler_missing_template() {
        let dir = TempDir::new().unwrap();
        let req = post(r#"{"viking":{"name":"Erik"}}"#);

        let response = post_handler(&req, &dir.path().join("thanks.html"));

        assert_eq!(response.status(), StatusCode::InternalServerError);
    }
}
