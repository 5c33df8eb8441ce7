//! Thin HTTP layer over `gloo_net`.
//!
//! Every call resolves to `Result<T, String>` where the error is a single
//! human-readable message: non-2xx bodies are mined for the usual JSON error
//! fields, falling back to the raw text, falling back to the status code.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

/// GET `path` and deserialize the JSON response.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = gloo_net::http::Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

/// POST `body` as JSON to `path` and deserialize the JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, String> {
    let status = response.status();

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(extract_error(status, &body));
    }

    // 204 carries no body; let the caller's type absorb a JSON null.
    if status == 204 {
        return serde_json::from_value(serde_json::Value::Null).map_err(|e| e.to_string());
    }

    let text = response.text().await.map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Normalize a non-2xx body into one message.
///
/// Backends answer errors either as JSON (`message`, `error`, `msg` or
/// `detail` fields) or as plain text; anything unusable becomes "HTTP {n}".
fn extract_error(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "msg", "detail"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && serde_json::from_str::<serde_json::Value>(trimmed).is_err() {
        return trimmed.to_string();
    }

    format!("HTTP {}", status)
}

#[cfg(test)]
mod tests {
    use super::extract_error;

    #[test]
    fn prefers_message_field() {
        let body = r#"{"message": "Código no encontrado", "error": "NOT_FOUND"}"#;
        assert_eq!(extract_error(404, body), "Código no encontrado");
    }

    #[test]
    fn falls_through_the_known_fields() {
        assert_eq!(extract_error(400, r#"{"error": "stock insuficiente"}"#), "stock insuficiente");
        assert_eq!(extract_error(400, r#"{"msg": "venta vacía"}"#), "venta vacía");
        assert_eq!(extract_error(422, r#"{"detail": "descuento inválido"}"#), "descuento inválido");
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        assert_eq!(extract_error(500, "  algo salió mal \n"), "algo salió mal");
    }

    #[test]
    fn unusable_bodies_become_status_code() {
        assert_eq!(extract_error(404, ""), "HTTP 404");
        assert_eq!(extract_error(500, r#"{"code": 12}"#), "HTTP 500");
        assert_eq!(extract_error(400, r#"{"message": "   "}"#), "HTTP 400");
    }
}
