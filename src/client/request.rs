//! # Requests del cliente
//! src/client/request.rs

use crate::error::ClientError;
use crate::http::response::DEFAULT_VERSION;
use crate::http::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Path al que el navegador interactivo manda los POST
pub const POST_PATH: &str = "/simple_server.rb";

/// Request listo para enviar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ClientRequest {
    /// GET de un recurso; agrega la `/` inicial si falta
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web::client::ClientRequest;
    ///
    /// let request = ClientRequest::get("index.html");
    /// assert_eq!(request.to_bytes(), b"GET /index.html HTTP/1.0\r\n\r\n");
    /// ```
    pub fn get(resource: &str) -> Self {
        let path = if resource.starts_with('/') {
            resource.to_string()
        } else {
            format!("/{}", resource)
        };

        Self {
            method: Method::GET,
            path,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// POST con body `{outer_key: form}` y su `Content-Length`
    ///
    /// # Ejemplo
    /// ```
    /// use simple_web::client::ClientRequest;
    /// use std::collections::BTreeMap;
    ///
    /// let form = BTreeMap::from([("name", "Erik")]);
    /// let request = ClientRequest::post_form("viking", &form).unwrap();
    /// assert_eq!(request.body(), br#"{"viking":{"name":"Erik"}}"#);
    /// ```
    pub fn post_form<T: Serialize>(outer_key: &str, form: &T) -> Result<Self, ClientError> {
        let mut params = Map::new();
        params.insert(outer_key.to_string(), serde_json::to_value(form)?);
        let body = serde_json::to_vec(&Value::Object(params))?;

        Ok(Self {
            method: Method::POST,
            path: POST_PATH.to_string(),
            headers: vec![("Content-Length".to_string(), body.len().to_string())],
            body,
        })
    }

    /// `METHOD PATH VERSION\r\n` + headers + `\r\n` + body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = format!("{} {} {}\r\n", self.method.as_str(), self.path, DEFAULT_VERSION).into_bytes();
        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }
        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);
        result
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Request;

    #[derive(Serialize)]
    struct Form {
        name: &'static str,
        email: &'static str,
    }

    #[test]
    fn test_get_keeps_existing_slash() {
        assert_eq!(ClientRequest::get("/a.txt").path(), "/a.txt");
        assert_eq!(ClientRequest::get("a.txt").path(), "/a.txt");
    }

    #[test]
    fn test_post_form_wire_format() {
        let form = Form { name: "Erik", email: "erik@x.com" };
        let request = ClientRequest::post_form("viking", &form).unwrap();
        let body = r#"{"viking":{"name":"Erik","email":"erik@x.com"}}"#;

        let expected = format!(
            "POST /simple_server.rb HTTP/1.0\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        assert_eq!(request.to_bytes(), expected.into_bytes());
    }

    #[test]
    fn test_server_understands_post() {
        let form = Form { name: "Erik", email: "erik@x.com" };
        let request = ClientRequest::post_form("viking", &form).unwrap();

        let parsed = Request::parse(&request.to_bytes()).unwrap();
        assert_eq!(parsed.method(), Method::POST);
        assert_eq!(parsed.body(), request.body());
    }
}
